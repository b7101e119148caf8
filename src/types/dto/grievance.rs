use poem_openapi::{payload::Json, ApiResponse, Enum, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::grievance;

/// Grievance priority
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// Request model for filing a grievance
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct CreateGrievanceRequest {
    /// Filing user's ID (loose reference)
    pub user_id: String,

    /// Short subject line
    pub subject: String,

    /// Full description of the grievance
    pub details: String,

    /// Priority, defaults to low
    pub priority: Option<Priority>,
}

/// Request model for the status transition endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateGrievanceStatusRequest {
    /// Target status: "In Progress", "Resolved" or "Rejected"
    pub status: String,
}

/// A grievance record
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct GrievanceResponse {
    /// Grievance ID (UUID)
    pub id: String,

    pub user_id: String,

    pub subject: String,

    pub details: String,

    /// low, medium, high or critical
    pub priority: String,

    /// Open, In Progress, Resolved or Rejected
    pub status: String,

    /// Filing time (Unix timestamp)
    pub filed_at: i64,

    /// Resolution time; present exactly while status is Resolved or Rejected
    pub resolved_at: Option<i64>,
}

impl From<grievance::Model> for GrievanceResponse {
    fn from(m: grievance::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            subject: m.subject,
            details: m.details,
            priority: m.priority,
            status: m.status,
            filed_at: m.filed_at,
            resolved_at: m.resolved_at,
        }
    }
}

/// API response for grievance creation
#[derive(ApiResponse)]
pub enum GrievanceCreatedResponse {
    /// Grievance filed
    #[oai(status = 201)]
    Created(Json<GrievanceResponse>),
}
