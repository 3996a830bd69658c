use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendParams {
    #[serde(alias = "user_id", rename = "userID", default)]
    pub user_id: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
}
