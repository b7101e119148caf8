use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::marketplace_listing::{self, ActiveModel, Entity as MarketplaceListing};

/// MarketplaceStore manages marketplace listing records
pub struct MarketplaceStore {
    db: DatabaseConnection,
}

impl MarketplaceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all listings in store order
    pub async fn list(&self) -> Result<Vec<marketplace_listing::Model>, InternalError> {
        MarketplaceListing::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("listing list", e))
    }

    /// Post a listing with a store-assigned id and timestamp
    pub async fn create(
        &self,
        user_id: String,
        listing_type: String,
        title: String,
        description: String,
        contact_info: String,
    ) -> Result<marketplace_listing::Model, InternalError> {
        let new_listing = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id),
            listing_type: Set(listing_type),
            title: Set(title),
            description: Set(description),
            contact_info: Set(contact_info),
            posted_at: Set(Utc::now().timestamp()),
        };

        new_listing
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("listing insert", e))
    }

    /// Delete a listing by id; NotFound when no row matches
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        let result = MarketplaceListing::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("listing delete", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::not_found("marketplace listing", id));
        }
        Ok(())
    }
}
