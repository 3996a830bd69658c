//! Whisker Algo - recommendation service for the Whisker cat adoption app
//!
//! This library provides the matching, ranking and fallback engine used
//! to recommend adoptable cats. Candidates are gathered in up to three
//! increasingly permissive retrieval passes and assembled into a
//! deduplicated, ordered result set.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    assemble, build_query, score, CandidateSource, FallbackConfig, FallbackMatcher, MatchOutcome,
    Page, SeenSet, SourceUnavailable,
};
pub use models::{Cat, FilterQuery, PreferenceProfile, RecommendedCat};
