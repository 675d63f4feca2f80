use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic message body used by error responses.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body of the liveness probe response.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

/// Landing response for the service root.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}
