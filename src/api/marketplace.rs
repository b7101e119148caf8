use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::errors::ResourceError;
use crate::stores::MarketplaceStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::marketplace::{
    CreateListingRequest, ListingCreatedResponse, ListingResponse,
};

/// Marketplace listing API endpoints
pub struct MarketplaceApi {
    store: Arc<MarketplaceStore>,
}

impl MarketplaceApi {
    pub fn new(store: Arc<MarketplaceStore>) -> Self {
        Self { store }
    }
}

#[derive(Tags)]
enum MarketplaceTags {
    /// Community marketplace listings
    Marketplace,
}

#[OpenApi]
impl MarketplaceApi {
    /// List all marketplace listings
    #[oai(
        path = "/marketplace",
        method = "get",
        tag = "MarketplaceTags::Marketplace"
    )]
    async fn list(&self) -> Result<Json<Vec<ListingResponse>>, ResourceError> {
        let listings = self
            .store
            .list()
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(listings.into_iter().map(Into::into).collect()))
    }

    /// Post a marketplace listing
    #[oai(
        path = "/marketplace",
        method = "post",
        tag = "MarketplaceTags::Marketplace"
    )]
    async fn create(
        &self,
        body: Json<CreateListingRequest>,
    ) -> Result<ListingCreatedResponse, ResourceError> {
        let body = body.0;
        let listing = self
            .store
            .create(
                body.user_id,
                body.listing_type.as_str().to_string(),
                body.title,
                body.description,
                body.contact_info,
            )
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(ListingCreatedResponse::Created(Json(listing.into())))
    }

    /// Delete a marketplace listing by id
    #[oai(
        path = "/marketplace/:id",
        method = "delete",
        tag = "MarketplaceTags::Marketplace"
    )]
    async fn delete(&self, id: Path<String>) -> Result<Json<DeleteResponse>, ResourceError> {
        self.store
            .delete(&id.0)
            .await
            .map_err(ResourceError::from_internal)?;

        Ok(Json(DeleteResponse {
            message: "Listing deleted".to_string(),
        }))
    }
}
