use crate::core::dedup::SeenSet;
use crate::core::query::build_query;
use crate::core::scoring::score;
use crate::models::{Cat, FilterQuery, PreferenceProfile};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Raised by a candidate source when a retrieval pass cannot complete
#[derive(Debug, Error)]
#[error("candidate source unavailable: {0}")]
pub struct SourceUnavailable(pub String);

/// Anything the matcher can pull candidate pools from
///
/// The catalog client implements this; tests use in-memory stubs. An
/// error is distinguishable from an empty pool — the matcher logs it
/// and moves on to the next tier.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch(&self, query: &FilterQuery) -> Result<Vec<Cat>, SourceUnavailable>;
}

/// Tunable fallback policy
///
/// Observed behavior disagreed across iterations on when the second
/// pass fires and how much Tier 1 must keep, so the policy is named
/// configuration rather than hard-coded.
#[derive(Debug, Clone)]
pub struct FallbackConfig {
    /// Tier N+1 runs only while fewer than this many cats are gathered
    pub min_results_before_fallback: usize,
    /// Minimum score a Tier 1 candidate must reach to be kept
    pub tier1_score_threshold: u8,
    /// Run the partial tier unconditionally instead of only on scarcity
    pub tier2_always_runs: bool,
    /// Per-pass timeout; a timed-out pass counts as a failed one
    pub fetch_timeout: Duration,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            min_results_before_fallback: 2,
            tier1_score_threshold: 2,
            tier2_always_runs: false,
            fetch_timeout: Duration::from_secs(3),
        }
    }
}

/// Result of the tiered gathering process
#[derive(Debug)]
pub struct MatchOutcome {
    /// Deduplicated cats in tier-priority order (T1, T2, T3, each in
    /// retrieval order)
    pub cats: Vec<Cat>,
    pub tiers_run: u8,
    pub total_fetched: usize,
}

/// Tiered fallback matcher
///
/// Gathers candidates in up to three increasingly permissive passes:
///
/// 1. **Strict** — full filter query; keep cats scoring at least the
///    configured threshold.
/// 2. **Partial** — relaxed geography-only query; keep unseen cats
///    scoring exactly 1. Runs on scarcity, or always when configured.
/// 3. **Remainder** — geography-only (or empty) query; keep every
///    unseen cat regardless of score. Runs on scarcity only.
///
/// A failed or timed-out pass contributes zero candidates and the
/// matcher proceeds; upstream trouble degrades the result instead of
/// aborting the request. All state is request-scoped.
#[derive(Debug, Clone, Default)]
pub struct FallbackMatcher {
    config: FallbackConfig,
}

impl FallbackMatcher {
    pub fn new(config: FallbackConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Run the tiered pipeline against `source` for one profile
    pub async fn gather<S>(&self, source: &S, profile: &PreferenceProfile) -> MatchOutcome
    where
        S: CandidateSource + ?Sized,
    {
        let mut seen = SeenSet::new();
        let mut cats: Vec<Cat> = Vec::new();
        let mut total_fetched = 0;
        let mut tiers_run = 0;

        // Tier 1 — strict: push every constraint down to the catalog,
        // keep only multi-dimension matches.
        tiers_run += 1;
        let pool = self.fetch_pass(source, &build_query(profile, true), "strict").await;
        total_fetched += pool.len();
        for cat in pool {
            if score(&cat, profile) >= self.config.tier1_score_threshold && seen.insert(&cat.id) {
                cats.push(cat);
            }
        }

        // Tier 2 — partial: broader geographic pool, keep unseen
        // single-dimension matches.
        if cats.len() < self.config.min_results_before_fallback || self.config.tier2_always_runs {
            tiers_run += 1;
            let pool = self.fetch_pass(source, &build_query(profile, false), "partial").await;
            total_fetched += pool.len();
            for cat in pool {
                if score(&cat, profile) == 1 && !seen.contains(&cat.id) {
                    seen.insert(&cat.id);
                    cats.push(cat);
                }
            }
        }

        // Tier 3 — remainder: anything unseen, any score.
        if cats.len() < self.config.min_results_before_fallback {
            tiers_run += 1;
            let pool = self.fetch_pass(source, &build_query(profile, false), "remainder").await;
            total_fetched += pool.len();
            for cat in pool {
                if seen.insert(&cat.id) {
                    cats.push(cat);
                }
            }
        }

        tracing::debug!(
            "Gathered {} cats over {} tier(s) ({} fetched)",
            cats.len(),
            tiers_run,
            total_fetched
        );

        MatchOutcome {
            cats,
            tiers_run,
            total_fetched,
        }
    }

    /// One retrieval pass; failures and timeouts yield an empty pool
    async fn fetch_pass<S>(&self, source: &S, query: &FilterQuery, tier: &str) -> Vec<Cat>
    where
        S: CandidateSource + ?Sized,
    {
        match tokio::time::timeout(self.config.fetch_timeout, source.fetch(query)).await {
            Ok(Ok(pool)) => {
                tracing::debug!("{} pass returned {} candidates", tier, pool.len());
                pool
            }
            Ok(Err(e)) => {
                tracing::warn!("{} pass failed, continuing without it: {}", tier, e);
                Vec::new()
            }
            Err(_) => {
                tracing::warn!(
                    "{} pass timed out after {:?}, continuing without it",
                    tier,
                    self.config.fetch_timeout
                );
                Vec::new()
            }
        }
    }
}
