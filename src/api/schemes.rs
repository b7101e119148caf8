use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::errors::ResourceError;
use crate::stores::SchemeStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::scheme::{CreateSchemeRequest, SchemeCreatedResponse, SchemeResponse};

/// Welfare scheme API endpoints
pub struct SchemeApi {
    store: Arc<SchemeStore>,
}

impl SchemeApi {
    pub fn new(store: Arc<SchemeStore>) -> Self {
        Self { store }
    }
}

#[derive(Tags)]
enum SchemeTags {
    /// Welfare scheme catalogue
    Schemes,
}

#[OpenApi]
impl SchemeApi {
    /// List all welfare schemes
    #[oai(path = "/schemes", method = "get", tag = "SchemeTags::Schemes")]
    async fn list(&self) -> Result<Json<Vec<SchemeResponse>>, ResourceError> {
        let schemes = self
            .store
            .list()
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(schemes.into_iter().map(Into::into).collect()))
    }

    /// Create a welfare scheme
    #[oai(path = "/schemes", method = "post", tag = "SchemeTags::Schemes")]
    async fn create(
        &self,
        body: Json<CreateSchemeRequest>,
    ) -> Result<SchemeCreatedResponse, ResourceError> {
        let body = body.0;
        let scheme = self
            .store
            .create(body.name, body.description, body.eligibility, body.category)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(SchemeCreatedResponse::Created(Json(scheme.into())))
    }

    /// Delete a welfare scheme by id
    #[oai(path = "/schemes/:id", method = "delete", tag = "SchemeTags::Schemes")]
    async fn delete(&self, id: Path<String>) -> Result<Json<DeleteResponse>, ResourceError> {
        self.store
            .delete(&id.0)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(DeleteResponse {
            message: "Scheme deleted".to_string(),
        }))
    }
}
