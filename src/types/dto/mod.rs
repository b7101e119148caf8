// Wire models shared between the API layer and clients
pub mod application;
pub mod auth;
pub mod common;
pub mod emergency_contact;
pub mod grievance;
pub mod marketplace;
pub mod scheme;
