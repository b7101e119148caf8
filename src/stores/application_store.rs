use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::application::{self, ActiveModel, Entity as Application};

/// ApplicationStore manages benefit application records
pub struct ApplicationStore {
    db: DatabaseConnection,
}

impl ApplicationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all applications in store order
    pub async fn list(&self) -> Result<Vec<application::Model>, InternalError> {
        Application::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("application list", e))
    }

    /// File an application; status always starts as Pending
    pub async fn create(
        &self,
        user_id: String,
        scheme_id: String,
        scheme_name: String,
        notes: Option<String>,
    ) -> Result<application::Model, InternalError> {
        let new_application = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id),
            scheme_id: Set(scheme_id),
            scheme_name: Set(scheme_name),
            notes: Set(notes),
            status: Set("Pending".to_string()),
            applied_at: Set(Utc::now().timestamp()),
        };

        new_application
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("application insert", e))
    }
}
