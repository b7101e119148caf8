use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::user::{self, ActiveModel, Entity as User};

/// CredentialStore manages user accounts and password verification
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new account with a hashed password
    ///
    /// # Arguments
    /// * `email` - Unique email address for the account
    /// * `password` - Plaintext password, hashed with Argon2 before storage
    /// * `role` - Account role; defaults to "family" when absent
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The created account row
    /// * `Err(InternalError)` - DuplicateEmail when the email is taken, or Database/Crypto
    pub async fn register(
        &self,
        email: String,
        password: String,
        role: Option<String>,
    ) -> Result<user::Model, InternalError> {
        // Check if email already exists
        let existing = User::find()
            .filter(user::Column::Email.eq(&email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("register lookup", e))?;

        if existing.is_some() {
            return Err(InternalError::DuplicateEmail);
        }

        let password_hash = hash_password(&password)?;

        let new_user = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(role.unwrap_or_else(|| "family".to_string())),
            created_at: Set(Utc::now().timestamp()),
        };

        // The unique index is the arbiter for concurrent registrations;
        // the pre-check above only covers the common case.
        let created = new_user.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                InternalError::DuplicateEmail
            } else {
                InternalError::database("register insert", e)
            }
        })?;

        Ok(created)
    }

    /// Verify credentials and return the matching account
    ///
    /// Unknown email and wrong password both surface as `InvalidCredentials`
    /// so the response cannot reveal which one failed.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<user::Model, InternalError> {
        let user = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("login lookup", e))?
            .ok_or(InternalError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| InternalError::InvalidCredentials)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| InternalError::InvalidCredentials)?;

        Ok(user)
    }
}

/// Hash a plaintext password with Argon2 and a fresh random salt
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_test_db() -> (DatabaseConnection, CredentialStore) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = CredentialStore::new(db.clone());
        (db, store)
    }

    #[tokio::test]
    async fn test_register_creates_account() {
        let (_db, store) = setup_test_db().await;

        let user = store
            .register("soldier@example.com".to_string(), "secret123".to_string(), None)
            .await
            .expect("Failed to register");

        assert!(!user.id.is_empty());
        assert_eq!(user.email, "soldier@example.com");
        assert_eq!(user.role, "family");
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let (db, store) = setup_test_db().await;

        let password = "mysecretpassword";
        store
            .register("a@example.com".to_string(), password.to_string(), None)
            .await
            .expect("Failed to register");

        let user = User::find()
            .filter(user::Column::Email.eq("a@example.com"))
            .one(&db)
            .await
            .expect("Failed to query user")
            .expect("User not found");

        assert_ne!(user.password_hash, password);
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_respects_explicit_role() {
        let (_db, store) = setup_test_db().await;

        let user = store
            .register(
                "officer@example.com".to_string(),
                "secret".to_string(),
                Some("officer".to_string()),
            )
            .await
            .expect("Failed to register");

        assert_eq!(user.role, "officer");
    }

    #[tokio::test]
    async fn test_register_fails_with_duplicate_email() {
        let (_db, store) = setup_test_db().await;

        store
            .register("dup@example.com".to_string(), "password1".to_string(), None)
            .await
            .expect("First registration should succeed");

        let result = store
            .register("dup@example.com".to_string(), "password2".to_string(), None)
            .await;

        match result {
            Err(InternalError::DuplicateEmail) => {}
            other => panic!("Expected DuplicateEmail, got {:?}", other.map(|u| u.email)),
        }
    }

    #[tokio::test]
    async fn test_concurrent_registrations_yield_one_success_one_conflict() {
        let (_db, store) = setup_test_db().await;

        // Both attempts start before either has committed, so the pre-check
        // cannot intercept them both; the unique index decides the winner.
        let (a, b) = tokio::join!(
            store.register("race@example.com".to_string(), "pw1".to_string(), None),
            store.register("race@example.com".to_string(), "pw2".to_string(), None),
        );

        let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(successes, 1);

        let conflicts = [a, b]
            .into_iter()
            .filter(|r| matches!(r, Err(InternalError::DuplicateEmail)))
            .count();
        assert_eq!(conflicts, 1);
    }

    #[tokio::test]
    async fn test_verify_credentials_succeeds_with_correct_password() {
        let (_db, store) = setup_test_db().await;

        let registered = store
            .register("v@example.com".to_string(), "correctpass".to_string(), None)
            .await
            .expect("Failed to register");

        let user = store
            .verify_credentials("v@example.com", "correctpass")
            .await
            .expect("Verification should succeed");

        assert_eq!(user.id, registered.id);
    }

    #[tokio::test]
    async fn test_verify_credentials_fails_with_wrong_password() {
        let (_db, store) = setup_test_db().await;

        store
            .register("v@example.com".to_string(), "correctpass".to_string(), None)
            .await
            .expect("Failed to register");

        let result = store.verify_credentials("v@example.com", "wrongpass").await;

        assert!(matches!(result, Err(InternalError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_verify_credentials_fails_with_unknown_email() {
        let (_db, store) = setup_test_db().await;

        let result = store
            .verify_credentials("nobody@example.com", "anypassword")
            .await;

        assert!(matches!(result, Err(InternalError::InvalidCredentials)));
    }
}
