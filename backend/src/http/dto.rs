//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::api::{ApiResponse, BaziData, BaziRequest, Pillar, Pillars};

/// Name reported by the liveness endpoints.
pub const SERVICE_NAME: &str = "bazi-service";

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            version: "v1".to_string(),
        }
    }
}
