use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::emergency_contact;

/// Request model for adding an emergency contact
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct CreateContactRequest {
    /// Owning user's ID (loose reference)
    pub user_id: String,

    /// Contact name
    pub name: String,

    /// Phone number
    pub phone: String,

    /// Relationship to the user
    pub relationship: String,
}

/// Request model for updating an emergency contact; absent fields are left unchanged
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,

    pub phone: Option<String>,

    pub relationship: Option<String>,
}

/// An emergency contact record
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct ContactResponse {
    /// Contact ID (UUID)
    pub id: String,

    pub user_id: String,

    pub name: String,

    pub phone: String,

    pub relationship: String,

    /// Creation time (Unix timestamp)
    pub created_at: i64,
}

impl From<emergency_contact::Model> for ContactResponse {
    fn from(m: emergency_contact::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            phone: m.phone,
            relationship: m.relationship,
            created_at: m.created_at,
        }
    }
}

/// API response for contact creation
#[derive(ApiResponse)]
pub enum ContactCreatedResponse {
    /// Contact created
    #[oai(status = 201)]
    Created(Json<ContactResponse>),
}
