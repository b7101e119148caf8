use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::errors::ResourceError;
use crate::stores::EmergencyContactStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::emergency_contact::{
    ContactCreatedResponse, ContactResponse, CreateContactRequest, UpdateContactRequest,
};

/// Emergency contact API endpoints
pub struct EmergencyContactApi {
    store: Arc<EmergencyContactStore>,
}

impl EmergencyContactApi {
    pub fn new(store: Arc<EmergencyContactStore>) -> Self {
        Self { store }
    }
}

#[derive(Tags)]
enum ContactTags {
    /// Per-user emergency contacts
    EmergencyContacts,
}

#[OpenApi]
impl EmergencyContactApi {
    /// List one user's emergency contacts
    #[oai(
        path = "/users/:user_id/emergency-contacts",
        method = "get",
        tag = "ContactTags::EmergencyContacts"
    )]
    async fn list_for_user(
        &self,
        user_id: Path<String>,
    ) -> Result<Json<Vec<ContactResponse>>, ResourceError> {
        let contacts = self
            .store
            .list_for_user(&user_id.0)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(contacts.into_iter().map(Into::into).collect()))
    }

    /// Add an emergency contact
    #[oai(
        path = "/emergency-contacts",
        method = "post",
        tag = "ContactTags::EmergencyContacts"
    )]
    async fn create(
        &self,
        body: Json<CreateContactRequest>,
    ) -> Result<ContactCreatedResponse, ResourceError> {
        let body = body.0;
        let contact = self
            .store
            .create(body.user_id, body.name, body.phone, body.relationship)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(ContactCreatedResponse::Created(Json(contact.into())))
    }

    /// Update an emergency contact's fields; absent fields are unchanged
    #[oai(
        path = "/emergency-contacts/:id",
        method = "patch",
        tag = "ContactTags::EmergencyContacts"
    )]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateContactRequest>,
    ) -> Result<Json<ContactResponse>, ResourceError> {
        let body = body.0;
        let contact = self
            .store
            .update(&id.0, body.name, body.phone, body.relationship)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(contact.into()))
    }

    /// Delete an emergency contact by id
    #[oai(
        path = "/emergency-contacts/:id",
        method = "delete",
        tag = "ContactTags::EmergencyContacts"
    )]
    async fn delete(&self, id: Path<String>) -> Result<Json<DeleteResponse>, ResourceError> {
        self.store
            .delete(&id.0)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(DeleteResponse {
            message: "Emergency contact deleted".to_string(),
        }))
    }
}
