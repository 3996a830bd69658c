use crate::core::{CandidateSource, SourceUnavailable};
use crate::models::{Cat, FilterQuery};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors from the cat catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the cat catalog service
///
/// The catalog applies the filter query — geography included — on its
/// side and returns the matching pool. An empty query is valid and
/// returns an unfiltered pool.
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Query candidate cats matching a filter
    pub async fn query_candidates(&self, query: &FilterQuery) -> Result<Vec<Cat>, CatalogError> {
        let url = format!("{}/api/cats", self.base_url.trim_end_matches('/'));

        tracing::debug!("Querying catalog: {} with {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to query catalog: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let cats = json
            .get("cats")
            .and_then(|c| c.as_array())
            .ok_or_else(|| CatalogError::InvalidResponse("Missing cats array".into()))?;

        let cats: Vec<Cat> = cats
            .iter()
            .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
            .collect();

        tracing::debug!("Catalog returned {} cats", cats.len());

        Ok(cats)
    }
}

#[async_trait]
impl CandidateSource for CatalogClient {
    async fn fetch(&self, query: &FilterQuery) -> Result<Vec<Cat>, SourceUnavailable> {
        self.query_candidates(query)
            .await
            .map_err(|e| SourceUnavailable(e.to_string()))
    }
}
