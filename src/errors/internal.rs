use thiserror::Error;

/// Error type for store operations.
///
/// Never exposed over HTTP; API endpoints convert these explicitly into
/// `AuthError` or `ResourceError`.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Cryptographic operation failed (hashing, verification)
    #[error("Crypto error: {operation} failed: {message}")]
    Crypto { operation: String, message: String },

    /// Email already registered
    #[error("email already registered")]
    DuplicateEmail,

    /// Credentials did not match any account
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No record with the given id
    #[error("no {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

impl InternalError {
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        InternalError::Database {
            operation: operation.into(),
            source,
        }
    }

    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        InternalError::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        InternalError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
