use crate::core::scoring::score;
use crate::models::{Cat, PreferenceProfile, RecommendedCat};
use std::collections::HashSet;

/// Page size used when the caller supplies no limit
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Pagination window over the final ordered list
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(number: Option<usize>, limit: Option<usize>) -> Self {
        Self {
            number: number.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
        }
    }
}

/// Final ordered result set
#[derive(Debug)]
pub struct AssembledResult {
    pub cats: Vec<RecommendedCat>,
    /// Matches surviving exclusion, before the pagination window
    pub total_matched: usize,
}

/// Apply exclusion, final ordering and pagination to gathered cats
///
/// Favorited cats are removed here, after matching, so they never eat a
/// fallback-tier slot yet never reach the output. In strict mode the
/// matcher's tier-priority order is preserved and no scores are
/// attached; otherwise every survivor is scored against the full
/// profile and stable-sorted descending, ties keeping their prior
/// relative order. The pagination window applies to the final ordered
/// list, never to an intermediate tier.
pub fn assemble(
    cats: Vec<Cat>,
    excluded_ids: &HashSet<String>,
    profile: &PreferenceProfile,
    page: Page,
) -> AssembledResult {
    let mut kept: Vec<RecommendedCat> = cats
        .into_iter()
        .filter(|cat| !excluded_ids.contains(&cat.id))
        .map(|cat| {
            let match_score = if profile.strict {
                None
            } else {
                Some(score(&cat, profile))
            };
            RecommendedCat { cat, match_score }
        })
        .collect();

    if !profile.strict {
        // Vec::sort_by is stable, so equal scores keep tier order
        kept.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    }

    let total_matched = kept.len();
    let start = (page.number - 1).saturating_mul(page.limit);

    let cats = kept.into_iter().skip(start).take(page.limit).collect();

    AssembledResult {
        cats,
        total_matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeRange;

    fn cat(id: &str, color: &str, age: u8) -> Cat {
        Cat {
            id: id.to_string(),
            name: None,
            color: color.to_string(),
            sex: "female".to_string(),
            breed: "tabby".to_string(),
            age,
            description: None,
            image_url: None,
        }
    }

    fn relaxed_profile() -> PreferenceProfile {
        PreferenceProfile {
            color: Some("black".to_string()),
            age: Some(AgeRange {
                min_age: Some(1),
                max_age: Some(5),
            }),
            strict: false,
            ..Default::default()
        }
    }

    fn ids(result: &AssembledResult) -> Vec<&str> {
        result.cats.iter().map(|r| r.cat.id.as_str()).collect()
    }

    #[test]
    fn test_excluded_ids_never_appear() {
        let cats = vec![cat("1", "black", 3), cat("2", "white", 3), cat("3", "grey", 2)];
        let excluded: HashSet<String> = ["2".to_string()].into();

        let result = assemble(cats, &excluded, &PreferenceProfile::default(), Page::default());

        assert_eq!(ids(&result), vec!["1", "3"]);
        assert_eq!(result.total_matched, 2);
    }

    #[test]
    fn test_relaxed_mode_sorts_by_score_descending() {
        // black/3 scores 3, white/3 scores 2, black/10 scores 2
        let cats = vec![cat("2", "white", 3), cat("3", "black", 10), cat("1", "black", 3)];

        let result = assemble(cats, &HashSet::new(), &relaxed_profile(), Page::default());

        assert_eq!(result.cats[0].cat.id, "1");
        assert_eq!(result.cats[0].match_score, Some(3));
        // 2 and 3 tie on score; stable sort keeps input order
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_strict_mode_preserves_tier_order_without_scores() {
        let mut profile = relaxed_profile();
        profile.strict = true;

        let cats = vec![cat("2", "white", 3), cat("1", "black", 3), cat("3", "grey", 9)];
        let result = assemble(cats, &HashSet::new(), &profile, Page::default());

        assert_eq!(ids(&result), vec!["2", "1", "3"]);
        assert!(result.cats.iter().all(|r| r.match_score.is_none()));
    }

    #[test]
    fn test_default_page_truncates_to_five() {
        let cats: Vec<Cat> = (0..9).map(|i| cat(&i.to_string(), "black", 3)).collect();

        let result = assemble(cats, &HashSet::new(), &PreferenceProfile::default(), Page::default());

        assert_eq!(result.cats.len(), 5);
        assert_eq!(result.total_matched, 9);
    }

    #[test]
    fn test_pagination_windows_the_final_order() {
        let cats: Vec<Cat> = (0..9).map(|i| cat(&i.to_string(), "black", 3)).collect();

        let page2 = assemble(
            cats,
            &HashSet::new(),
            &PreferenceProfile::default(),
            Page::new(Some(2), Some(4)),
        );

        assert_eq!(ids(&page2), vec!["4", "5", "6", "7"]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let cats = vec![cat("1", "black", 3)];

        let result = assemble(
            cats,
            &HashSet::new(),
            &PreferenceProfile::default(),
            Page::new(Some(3), Some(5)),
        );

        assert!(result.cats.is_empty());
        assert_eq!(result.total_matched, 1);
    }

    #[test]
    fn test_unconstrained_profile_keeps_input_order() {
        let cats = vec![cat("1", "black", 3), cat("2", "white", 7), cat("3", "grey", 1)];

        let result = assemble(cats, &HashSet::new(), &PreferenceProfile::default(), Page::default());

        // All scores are 0; stable sort leaves order untouched
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
        assert!(result.cats.iter().all(|r| r.match_score == Some(0)));
    }
}
