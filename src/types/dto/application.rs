use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::application;

/// Request model for filing a benefit application
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    /// Applicant's user ID (loose reference, not checked against users)
    pub user_id: String,

    /// Target scheme ID (loose reference, not checked against schemes)
    pub scheme_id: String,

    /// Scheme name as captured at application time
    pub scheme_name: String,

    /// Free-form notes
    pub notes: Option<String>,
}

/// A benefit application record
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct ApplicationResponse {
    /// Application ID (UUID)
    pub id: String,

    pub user_id: String,

    pub scheme_id: String,

    pub scheme_name: String,

    pub notes: Option<String>,

    /// Pending, Approved or Rejected; always Pending at creation
    pub status: String,

    /// Filing time (Unix timestamp)
    pub applied_at: i64,
}

impl From<application::Model> for ApplicationResponse {
    fn from(m: application::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            scheme_id: m.scheme_id,
            scheme_name: m.scheme_name,
            notes: m.notes,
            status: m.status,
            applied_at: m.applied_at,
        }
    }
}

/// API response for application creation
#[derive(ApiResponse)]
pub enum ApplicationCreatedResponse {
    /// Application filed
    #[oai(status = 201)]
    Created(Json<ApplicationResponse>),
}
