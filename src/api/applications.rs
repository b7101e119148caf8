use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::errors::ResourceError;
use crate::stores::ApplicationStore;
use crate::types::dto::application::{
    ApplicationCreatedResponse, ApplicationResponse, CreateApplicationRequest,
};

/// Benefit application API endpoints
pub struct ApplicationApi {
    store: Arc<ApplicationStore>,
}

impl ApplicationApi {
    pub fn new(store: Arc<ApplicationStore>) -> Self {
        Self { store }
    }
}

#[derive(Tags)]
enum ApplicationTags {
    /// Benefit applications
    Applications,
}

#[OpenApi]
impl ApplicationApi {
    /// List all benefit applications
    #[oai(
        path = "/applications",
        method = "get",
        tag = "ApplicationTags::Applications"
    )]
    async fn list(&self) -> Result<Json<Vec<ApplicationResponse>>, ResourceError> {
        let applications = self
            .store
            .list()
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(applications.into_iter().map(Into::into).collect()))
    }

    /// File a benefit application; status always starts as Pending
    #[oai(
        path = "/applications",
        method = "post",
        tag = "ApplicationTags::Applications"
    )]
    async fn create(
        &self,
        body: Json<CreateApplicationRequest>,
    ) -> Result<ApplicationCreatedResponse, ResourceError> {
        let body = body.0;
        let application = self
            .store
            .create(body.user_id, body.scheme_id, body.scheme_name, body.notes)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(ApplicationCreatedResponse::Created(Json(application.into())))
    }
}
