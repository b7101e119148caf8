use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::scheme::{self, ActiveModel, Entity as Scheme};

/// SchemeStore manages welfare scheme records
pub struct SchemeStore {
    db: DatabaseConnection,
}

impl SchemeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all schemes in store order
    pub async fn list(&self) -> Result<Vec<scheme::Model>, InternalError> {
        Scheme::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("scheme list", e))
    }

    /// Create a scheme with a store-assigned id and timestamp
    pub async fn create(
        &self,
        name: String,
        description: String,
        eligibility: String,
        category: String,
    ) -> Result<scheme::Model, InternalError> {
        let new_scheme = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name),
            description: Set(description),
            eligibility: Set(eligibility),
            category: Set(category),
            created_at: Set(Utc::now().timestamp()),
        };

        new_scheme
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("scheme insert", e))
    }

    /// Delete a scheme by id; NotFound when no row matches
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        let result = Scheme::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("scheme delete", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::not_found("scheme", id));
        }
        Ok(())
    }
}
