use poem_openapi::{payload::Json, ApiResponse, Enum, Object};
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
pub enum Role {
    Family,
    Officer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Family => "family",
            Role::Officer => "officer",
            Role::Admin => "admin",
        }
    }
}

/// Request model for account registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email address, unique across accounts
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,

    /// Account role, defaults to family
    pub role: Option<Role>,
}

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Plaintext password to verify
    pub password: String,
}

/// Public view of an account; the password hash is never included
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID (UUID)
    pub id: String,

    /// Email address
    pub email: String,

    /// Account role
    pub role: String,
}

/// API response for the register endpoint
#[derive(ApiResponse)]
pub enum RegisterApiResponse {
    /// Account created
    #[oai(status = 201)]
    Created(Json<UserResponse>),
}
