use poem_openapi::{payload::Json, ApiResponse, Enum, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::marketplace_listing;

/// Kind of marketplace listing
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
pub enum ListingType {
    Book,
    Equipment,
    Housing,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Book => "book",
            ListingType::Equipment => "equipment",
            ListingType::Housing => "housing",
        }
    }
}

/// Request model for posting a marketplace listing
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct CreateListingRequest {
    /// Posting user's ID (loose reference)
    pub user_id: String,

    /// Listing kind
    #[oai(rename = "type")]
    pub listing_type: ListingType,

    /// Listing title
    pub title: String,

    /// Listing details
    pub description: String,

    /// How to reach the seller
    pub contact_info: String,
}

/// A marketplace listing record
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct ListingResponse {
    /// Listing ID (UUID)
    pub id: String,

    pub user_id: String,

    /// Listing kind
    #[oai(rename = "type")]
    pub listing_type: String,

    pub title: String,

    pub description: String,

    pub contact_info: String,

    /// Posting time (Unix timestamp)
    pub posted_at: i64,
}

impl From<marketplace_listing::Model> for ListingResponse {
    fn from(m: marketplace_listing::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            listing_type: m.listing_type,
            title: m.title,
            description: m.description,
            contact_info: m.contact_info,
            posted_at: m.posted_at,
        }
    }
}

/// API response for listing creation
#[derive(ApiResponse)]
pub enum ListingCreatedResponse {
    /// Listing posted
    #[oai(status = 201)]
    Created(Json<ListingResponse>),
}
