use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::scheme;

/// Request model for creating a welfare scheme
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateSchemeRequest {
    /// Scheme name
    pub name: String,

    /// What the scheme provides
    pub description: String,

    /// Who may apply
    pub eligibility: String,

    /// Scheme category
    pub category: String,
}

/// A welfare scheme record
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct SchemeResponse {
    /// Scheme ID (UUID)
    pub id: String,

    pub name: String,

    pub description: String,

    pub eligibility: String,

    pub category: String,

    /// Creation time (Unix timestamp)
    pub created_at: i64,
}

impl From<scheme::Model> for SchemeResponse {
    fn from(m: scheme::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            eligibility: m.eligibility,
            category: m.category,
            created_at: m.created_at,
        }
    }
}

/// API response for scheme creation
#[derive(ApiResponse)]
pub enum SchemeCreatedResponse {
    /// Scheme created
    #[oai(status = 201)]
    Created(Json<SchemeResponse>),
}
