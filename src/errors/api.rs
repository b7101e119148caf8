use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::internal::InternalError;
use crate::types::dto::common::ErrorResponse;

/// Error responses for the register/login endpoints
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Email already registered
    #[oai(status = 409)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Single opaque message for both unknown email and wrong password
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    pub fn duplicate_email() -> Self {
        AuthError::DuplicateEmail(Json(ErrorResponse {
            error: "duplicate_email".to_string(),
            message: "Email already registered".to_string(),
            status_code: 409,
        }))
    }

    pub fn internal_error() -> Self {
        AuthError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }

    /// Map a store error onto the auth taxonomy, logging detail server-side
    pub fn from_internal(err: InternalError) -> Self {
        match err {
            InternalError::DuplicateEmail => AuthError::duplicate_email(),
            InternalError::InvalidCredentials => AuthError::invalid_credentials(),
            other => {
                tracing::error!(error = %other, "auth operation failed");
                AuthError::internal_error()
            }
        }
    }
}

/// Error responses shared by the resource CRUD endpoints
#[derive(ApiResponse, Debug)]
pub enum ResourceError {
    /// Request failed validation
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// No record with the given id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ResourceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ResourceError::BadRequest(Json(ErrorResponse {
            error: "bad_request".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ResourceError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    pub fn internal_error() -> Self {
        ResourceError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }

    /// Map a store error onto the resource taxonomy, logging detail server-side
    pub fn from_internal(err: InternalError) -> Self {
        match err {
            InternalError::NotFound { entity, id } => {
                ResourceError::not_found(format!("No {} with id {}", entity, id))
            }
            other => {
                tracing::error!(error = %other, "store operation failed");
                ResourceError::internal_error()
            }
        }
    }
}
