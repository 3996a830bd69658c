use serde::{Deserialize, Serialize};

/// Geographic point attached to a preference profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Age bounds, each end independently optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    #[serde(rename = "minAge", default)]
    pub min_age: Option<u8>,
    #[serde(rename = "maxAge", default)]
    pub max_age: Option<u8>,
}

/// Stored adoption preferences for one user
///
/// Every constraint field is optional; an absent field means "no
/// constraint on this dimension". The profile is validated once at the
/// query/scoring boundary so downstream code never re-checks presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub location: Option<Location>,
    /// Search radius in miles; falls back to the configured default
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<AgeRange>,
    #[serde(default)]
    pub strict: bool,
}

impl PreferenceProfile {
    pub fn min_age(&self) -> Option<u8> {
        self.age.and_then(|a| a.min_age)
    }

    pub fn max_age(&self) -> Option<u8> {
        self.age.and_then(|a| a.max_age)
    }
}

/// Adoptable cat from the external catalog
///
/// Read-only during a request; `name`, `description` and `image_url`
/// are passed through to the client untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub color: String,
    pub sex: String,
    pub breed: String,
    pub age: u8,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Ephemeral catalog filter, rebuilt per retrieval pass
///
/// Serializes directly into catalog query parameters; unset fields are
/// omitted so an empty query means "all candidates".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "minAge", skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u8>,
    #[serde(rename = "maxAge", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        *self == FilterQuery::default()
    }
}

/// Cat plus its optional match score
///
/// The score is attached only in relaxed (non-strict) mode; strict mode
/// returns cats in tier-priority order without scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedCat {
    #[serde(flatten)]
    pub cat: Cat,
    #[serde(rename = "matchScore", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}
