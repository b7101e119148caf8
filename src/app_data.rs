use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::{
    ApplicationStore, CredentialStore, EmergencyContactStore, GrievanceStore, MarketplaceStore,
    SchemeStore,
};

/// Centralized application data following the main-owned stores pattern.
///
/// The database connection is created once in main, every store gets a clone
/// of the handle, and the whole bundle is shared behind an `Arc`. Shutdown
/// goes through `AppData::shutdown` so the connection is closed exactly once.
pub struct AppData {
    db: DatabaseConnection,
    pub credential_store: Arc<CredentialStore>,
    pub scheme_store: Arc<SchemeStore>,
    pub application_store: Arc<ApplicationStore>,
    pub emergency_contact_store: Arc<EmergencyContactStore>,
    pub marketplace_store: Arc<MarketplaceStore>,
    pub grievance_store: Arc<GrievanceStore>,
}

impl AppData {
    /// Build all stores over an already-connected, migrated database
    pub fn init(db: DatabaseConnection) -> Self {
        Self {
            credential_store: Arc::new(CredentialStore::new(db.clone())),
            scheme_store: Arc::new(SchemeStore::new(db.clone())),
            application_store: Arc::new(ApplicationStore::new(db.clone())),
            emergency_contact_store: Arc::new(EmergencyContactStore::new(db.clone())),
            marketplace_store: Arc::new(MarketplaceStore::new(db.clone())),
            grievance_store: Arc::new(GrievanceStore::new(db.clone())),
            db,
        }
    }

    /// Close the database connection for clean process exit
    pub async fn shutdown(self) -> Result<(), sea_orm::DbErr> {
        self.db.close().await
    }
}
