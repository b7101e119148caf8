use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::emergency_contact::{self, ActiveModel, Entity as EmergencyContact};

/// EmergencyContactStore manages per-user emergency contact records
pub struct EmergencyContactStore {
    db: DatabaseConnection,
}

impl EmergencyContactStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the contacts belonging to one user
    pub async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<emergency_contact::Model>, InternalError> {
        EmergencyContact::find()
            .filter(emergency_contact::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("contact list", e))
    }

    /// Create a contact with a store-assigned id and timestamp
    pub async fn create(
        &self,
        user_id: String,
        name: String,
        phone: String,
        relationship: String,
    ) -> Result<emergency_contact::Model, InternalError> {
        let new_contact = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id),
            name: Set(name),
            phone: Set(phone),
            relationship: Set(relationship),
            created_at: Set(Utc::now().timestamp()),
        };

        new_contact
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("contact insert", e))
    }

    /// Update a contact's fields; absent arguments leave the column unchanged.
    /// Returns the post-update row, or NotFound when the id has no match.
    pub async fn update(
        &self,
        id: &str,
        name: Option<String>,
        phone: Option<String>,
        relationship: Option<String>,
    ) -> Result<emergency_contact::Model, InternalError> {
        let contact = EmergencyContact::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("contact lookup", e))?
            .ok_or_else(|| InternalError::not_found("emergency contact", id))?;

        let mut active = contact.into_active_model();
        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(phone) = phone {
            active.phone = Set(phone);
        }
        if let Some(relationship) = relationship {
            active.relationship = Set(relationship);
        }

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("contact update", e))
    }

    /// Delete a contact by id; NotFound when no row matches
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        let result = EmergencyContact::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("contact delete", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::not_found("emergency contact", id));
        }
        Ok(())
    }
}
