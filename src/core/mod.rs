// Core algorithm exports
pub mod assemble;
pub mod dedup;
pub mod matcher;
pub mod query;
pub mod scoring;

pub use assemble::{assemble, AssembledResult, Page, DEFAULT_PAGE_SIZE};
pub use dedup::SeenSet;
pub use matcher::{CandidateSource, FallbackConfig, FallbackMatcher, MatchOutcome, SourceUnavailable};
pub use query::{build_query, DEFAULT_RADIUS_MILES};
pub use scoring::{score, MAX_SCORE};
