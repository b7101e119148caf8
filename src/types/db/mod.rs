// Database entities, one per table
pub mod application;
pub mod emergency_contact;
pub mod grievance;
pub mod marketplace_listing;
pub mod scheme;
pub mod user;
