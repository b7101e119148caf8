use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Standardized error response body
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Confirmation body returned by delete endpoints
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
}
