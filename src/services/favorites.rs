use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Errors from the favorites service
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the favorites microservice
///
/// Favorites are only used to exclude cats the user already saved, so
/// callers treat any failure here as an empty set and carry on.
pub struct FavoritesClient {
    base_url: String,
    client: Client,
}

impl FavoritesClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch the set of favorited cat ids for a user
    ///
    /// An empty set is a normal result; a user with no favorites record
    /// at all (404) gets one too.
    pub async fn get_favorites(&self, user_id: &str) -> Result<HashSet<String>, FavoritesError> {
        let url = format!(
            "{}/api/favorites/{}",
            self.base_url.trim_end_matches('/'),
            user_id
        );

        tracing::debug!("Fetching favorites from: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(HashSet::new());
        }

        if !response.status().is_success() {
            return Err(FavoritesError::ApiError(format!(
                "Failed to fetch favorites: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let favorites = json
            .get("favorites")
            .and_then(|f| f.as_array())
            .ok_or_else(|| FavoritesError::InvalidResponse("Missing favorites array".into()))?;

        Ok(favorites
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_favorites_returns_id_set() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/favorites/u1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"favorites": ["c1", "c2", "c1"]}"#)
            .create_async()
            .await;

        let client = FavoritesClient::new(server.url(), Duration::from_secs(1));
        let favorites = client.get_favorites("u1").await.unwrap();

        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains("c1"));
        assert!(favorites.contains("c2"));
    }

    #[tokio::test]
    async fn test_empty_favorites_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/favorites/u1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"favorites": []}"#)
            .create_async()
            .await;

        let client = FavoritesClient::new(server.url(), Duration::from_secs(1));
        let favorites = client.get_favorites("u1").await.unwrap();

        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_missing_record_means_no_favorites() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/favorites/u1")
            .with_status(404)
            .create_async()
            .await;

        let client = FavoritesClient::new(server.url(), Duration::from_secs(1));
        let favorites = client.get_favorites("u1").await.unwrap();

        assert!(favorites.is_empty());
    }
}
