use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub success: bool,
    pub matches: Vec<MatchResult>,
    pub message: String,
}

impl FindMatchesResponse {
    pub fn new(matches: Vec<MatchResult>) -> Self {
        let message = format!("Found {} potential study partners for you!", matches.len());
        Self {
            success: true,
            matches,
            message,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub status_code: u16,
}
