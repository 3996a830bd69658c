use crate::models::PreferenceProfile;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors from the preferences service
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the preferences microservice
///
/// A user without a stored profile is a `NotFound`, surfaced to the
/// caller — recommendations are meaningless without preferences, so
/// this is the one upstream failure that is fatal to a request.
pub struct PreferencesClient {
    base_url: String,
    client: Client,
}

impl PreferencesClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch the stored preference profile for a user
    pub async fn get_preferences(
        &self,
        user_id: &str,
    ) -> Result<PreferenceProfile, PreferencesError> {
        let url = format!(
            "{}/api/preferences/{}",
            self.base_url.trim_end_matches('/'),
            user_id
        );

        tracing::debug!("Fetching preferences from: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PreferencesError::NotFound(format!(
                "No preferences stored for user {}",
                user_id
            )));
        }

        if !response.status().is_success() {
            return Err(PreferencesError::ApiError(format!(
                "Failed to fetch preferences: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        // The preferences service wraps the profile in a data envelope
        let data = json
            .get("data")
            .ok_or_else(|| PreferencesError::InvalidResponse("Missing data envelope".into()))?;

        serde_json::from_value(data.clone()).map_err(|e| {
            PreferencesError::InvalidResponse(format!("Failed to parse preferences: {}", e))
        })
    }
}
