use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::errors::ResourceError;
use crate::stores::{GrievanceStore, StatusTarget};
use crate::types::dto::grievance::{
    CreateGrievanceRequest, GrievanceCreatedResponse, GrievanceResponse,
    UpdateGrievanceStatusRequest,
};

/// Grievance API endpoints
pub struct GrievanceApi {
    store: Arc<GrievanceStore>,
}

impl GrievanceApi {
    pub fn new(store: Arc<GrievanceStore>) -> Self {
        Self { store }
    }
}

#[derive(Tags)]
enum GrievanceTags {
    /// Grievance filing and tracking
    Grievances,
}

#[OpenApi]
impl GrievanceApi {
    /// List all grievances
    #[oai(path = "/grievances", method = "get", tag = "GrievanceTags::Grievances")]
    async fn list(&self) -> Result<Json<Vec<GrievanceResponse>>, ResourceError> {
        let grievances = self
            .store
            .list()
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(grievances.into_iter().map(Into::into).collect()))
    }

    /// File a grievance; status always starts as Open
    #[oai(path = "/grievances", method = "post", tag = "GrievanceTags::Grievances")]
    async fn create(
        &self,
        body: Json<CreateGrievanceRequest>,
    ) -> Result<GrievanceCreatedResponse, ResourceError> {
        let body = body.0;
        let grievance = self
            .store
            .create(
                body.user_id,
                body.subject,
                body.details,
                body.priority.map(|p| p.as_str().to_string()),
            )
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(GrievanceCreatedResponse::Created(Json(grievance.into())))
    }

    /// Transition a grievance's status
    ///
    /// Accepted targets are "In Progress", "Resolved" and "Rejected"; the
    /// target is validated before any store call so a rejected value leaves
    /// the record untouched.
    #[oai(
        path = "/grievances/:id/status",
        method = "patch",
        tag = "GrievanceTags::Grievances"
    )]
    async fn update_status(
        &self,
        id: Path<String>,
        body: Json<UpdateGrievanceStatusRequest>,
    ) -> Result<Json<GrievanceResponse>, ResourceError> {
        let target = StatusTarget::parse(&body.status).ok_or_else(|| {
            ResourceError::bad_request(format!(
                "Invalid status '{}'; expected one of: In Progress, Resolved, Rejected",
                body.status
            ))
        })?;

        let grievance = self
            .store
            .update_status(&id.0, target)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(grievance.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_api() -> GrievanceApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        GrievanceApi::new(Arc::new(GrievanceStore::new(db)))
    }

    async fn file_grievance(api: &GrievanceApi) -> GrievanceResponse {
        let result = api
            .create(Json(CreateGrievanceRequest {
                user_id: "u1".to_string(),
                subject: "Mess bill discrepancy".to_string(),
                details: "Charged twice in March".to_string(),
                priority: None,
            }))
            .await
            .expect("Create should succeed");

        let GrievanceCreatedResponse::Created(Json(grievance)) = result;
        grievance
    }

    #[tokio::test]
    async fn test_open_is_not_an_accepted_target() {
        let api = setup_api().await;
        let grievance = file_grievance(&api).await;

        let result = api
            .update_status(
                Path(grievance.id.clone()),
                Json(UpdateGrievanceStatusRequest {
                    status: "Open".to_string(),
                }),
            )
            .await;

        assert!(matches!(result, Err(ResourceError::BadRequest(_))));

        // Record unchanged
        let all = api.list().await.expect("List should succeed");
        assert_eq!(all[0].status, "Open");
        assert!(all[0].resolved_at.is_none());
    }

    #[tokio::test]
    async fn test_unknown_target_is_bad_request() {
        let api = setup_api().await;
        let grievance = file_grievance(&api).await;

        let result = api
            .update_status(
                Path(grievance.id),
                Json(UpdateGrievanceStatusRequest {
                    status: "banana".to_string(),
                }),
            )
            .await;

        assert!(matches!(result, Err(ResourceError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_resolve_then_reopen_clears_resolved_at() {
        let api = setup_api().await;
        let grievance = file_grievance(&api).await;

        let resolved = api
            .update_status(
                Path(grievance.id.clone()),
                Json(UpdateGrievanceStatusRequest {
                    status: "Resolved".to_string(),
                }),
            )
            .await
            .expect("Resolve should succeed");
        assert!(resolved.resolved_at.is_some());

        let reopened = api
            .update_status(
                Path(grievance.id),
                Json(UpdateGrievanceStatusRequest {
                    status: "In Progress".to_string(),
                }),
            )
            .await
            .expect("Reopen should succeed");

        assert_eq!(reopened.status, "In Progress");
        assert!(reopened.resolved_at.is_none());
    }

    #[tokio::test]
    async fn test_update_status_missing_id_is_not_found() {
        let api = setup_api().await;

        let result = api
            .update_status(
                Path("missing".to_string()),
                Json(UpdateGrievanceStatusRequest {
                    status: "Resolved".to_string(),
                }),
            )
            .await;

        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
