// Stores layer - Data access and repository pattern
pub mod application_store;
pub mod credential_store;
pub mod emergency_contact_store;
pub mod grievance_store;
pub mod marketplace_store;
pub mod scheme_store;

pub use application_store::ApplicationStore;
pub use credential_store::CredentialStore;
pub use emergency_contact_store::EmergencyContactStore;
pub use grievance_store::{GrievanceStore, StatusTarget};
pub use marketplace_store::MarketplaceStore;
pub use scheme_store::SchemeStore;
