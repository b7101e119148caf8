use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::errors::AuthError;
use crate::stores::CredentialStore;
use crate::types::dto::auth::{LoginRequest, RegisterApiResponse, RegisterRequest, UserResponse};

/// Authentication API endpoints
pub struct AuthApi {
    credential_store: Arc<CredentialStore>,
}

impl AuthApi {
    pub fn new(credential_store: Arc<CredentialStore>) -> Self {
        Self { credential_store }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Account registration and login
    Authentication,
}

#[OpenApi]
impl AuthApi {
    /// Register a new account
    ///
    /// The password is hashed before storage and never returned.
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(
        &self,
        body: Json<RegisterRequest>,
    ) -> Result<RegisterApiResponse, AuthError> {
        let body = body.0;
        let user = self
            .credential_store
            .register(
                body.email,
                body.password,
                body.role.map(|r| r.as_str().to_string()),
            )
            .await
            .map_err(AuthError::from_internal)?;

        Ok(RegisterApiResponse::Created(Json(UserResponse {
            id: user.id,
            email: user.email,
            role: user.role,
        })))
    }

    /// Verify credentials
    ///
    /// No session token is issued; the response carries the identity only.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<UserResponse>, AuthError> {
        let user = self
            .credential_store
            .verify_credentials(&body.email, &body.password)
            .await
            .map_err(AuthError::from_internal)?;

        Ok(Json(UserResponse {
            id: user.id,
            email: user.email,
            role: user.role,
        }))
    }
}
