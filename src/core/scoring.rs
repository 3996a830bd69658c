use crate::models::{Cat, PreferenceProfile};

/// Maximum attainable match score (one point per scorable dimension)
pub const MAX_SCORE: u8 = 5;

/// Score a cat against a preference profile (0-5)
///
/// The score is the count of independently satisfied dimensions, one
/// point each:
/// 1. color equals the preferred color
/// 2. sex equals the preferred sex
/// 3. breed equals the preferred breed
/// 4. age is at least the preferred minimum
/// 5. age is at most the preferred maximum
///
/// Unset profile dimensions contribute nothing either way. Note that
/// the age bounds score independently: a cat satisfying only one end of
/// a fully specified range still earns that point. Partial credit is
/// the observed product behavior, kept deliberately.
pub fn score(cat: &Cat, profile: &PreferenceProfile) -> u8 {
    let mut score = 0;

    if profile.color.as_deref() == Some(cat.color.as_str()) {
        score += 1;
    }
    if profile.sex.as_deref() == Some(cat.sex.as_str()) {
        score += 1;
    }
    if profile.breed.as_deref() == Some(cat.breed.as_str()) {
        score += 1;
    }
    if let Some(min_age) = profile.min_age() {
        if cat.age >= min_age {
            score += 1;
        }
    }
    if let Some(max_age) = profile.max_age() {
        if cat.age <= max_age {
            score += 1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeRange;

    fn cat(color: &str, sex: &str, breed: &str, age: u8) -> Cat {
        Cat {
            id: "c1".to_string(),
            name: None,
            color: color.to_string(),
            sex: sex.to_string(),
            breed: breed.to_string(),
            age,
            description: None,
            image_url: None,
        }
    }

    fn profile(
        color: Option<&str>,
        sex: Option<&str>,
        breed: Option<&str>,
        min_age: Option<u8>,
        max_age: Option<u8>,
    ) -> PreferenceProfile {
        PreferenceProfile {
            color: color.map(String::from),
            sex: sex.map(String::from),
            breed: breed.map(String::from),
            age: if min_age.is_some() || max_age.is_some() {
                Some(AgeRange { min_age, max_age })
            } else {
                None
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_unconstrained_profile_scores_zero() {
        let c = cat("black", "female", "tabby", 3);
        assert_eq!(score(&c, &PreferenceProfile::default()), 0);
    }

    #[test]
    fn test_full_match_scores_max() {
        let c = cat("black", "female", "tabby", 3);
        let p = profile(Some("black"), Some("female"), Some("tabby"), Some(1), Some(5));
        assert_eq!(score(&c, &p), MAX_SCORE);
    }

    #[test]
    fn test_each_dimension_scores_one() {
        let c = cat("black", "female", "tabby", 3);

        assert_eq!(score(&c, &profile(Some("black"), None, None, None, None)), 1);
        assert_eq!(score(&c, &profile(None, Some("female"), None, None, None)), 1);
        assert_eq!(score(&c, &profile(None, None, Some("tabby"), None, None)), 1);
        assert_eq!(score(&c, &profile(None, None, None, Some(1), None)), 1);
        assert_eq!(score(&c, &profile(None, None, None, None, Some(5))), 1);
    }

    #[test]
    fn test_mismatch_does_not_subtract() {
        let c = cat("black", "female", "tabby", 3);
        let p = profile(Some("white"), Some("female"), None, None, None);
        assert_eq!(score(&c, &p), 1);
    }

    #[test]
    fn test_age_bounds_give_partial_credit() {
        // Cat above the max still earns the minAge point
        let old_cat = cat("black", "female", "tabby", 10);
        let p = profile(None, None, None, Some(1), Some(5));
        assert_eq!(score(&old_cat, &p), 1);

        // Cat below the min still earns the maxAge point
        let kitten = cat("black", "female", "tabby", 0);
        assert_eq!(score(&kitten, &p), 1);

        // Cat inside the range earns both
        let mid = cat("black", "female", "tabby", 3);
        assert_eq!(score(&mid, &p), 2);
    }

    #[test]
    fn test_adding_satisfied_constraint_never_decreases_score() {
        let c = cat("black", "female", "tabby", 3);
        let base = profile(Some("black"), None, None, None, None);
        let more = profile(Some("black"), Some("female"), None, None, None);
        assert!(score(&c, &more) >= score(&c, &base));
    }

    #[test]
    fn test_color_and_age_range_profile() {
        let p = profile(Some("black"), None, None, Some(1), Some(5));

        let c1 = cat("black", "female", "tabby", 3);
        let c2 = cat("white", "female", "tabby", 3);
        let c3 = cat("black", "female", "tabby", 10);

        assert_eq!(score(&c1, &p), 3);
        assert_eq!(score(&c2, &p), 2);
        assert_eq!(score(&c3, &p), 2);
    }
}
