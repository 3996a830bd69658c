// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AgeRange, Cat, FilterQuery, Location, PreferenceProfile, RecommendedCat};
pub use requests::RecommendParams;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse};
