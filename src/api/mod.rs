// API layer - HTTP endpoints
pub mod applications;
pub mod auth;
pub mod emergency_contacts;
pub mod grievances;
pub mod marketplace;
pub mod schemes;

use std::sync::Arc;

pub use applications::ApplicationApi;
pub use auth::AuthApi;
pub use emergency_contacts::EmergencyContactApi;
pub use grievances::GrievanceApi;
pub use marketplace::MarketplaceApi;
pub use schemes::SchemeApi;

use poem::{get, handler, middleware::Cors, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Liveness probe at the server root
#[handler]
fn liveness() -> &'static str {
    "Military Welfare Portal API is running"
}

/// Compose the full application: API under /api, Swagger UI under /swagger,
/// liveness at /, permissive CORS throughout.
pub fn build_app(app_data: &AppData) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            AuthApi::new(Arc::clone(&app_data.credential_store)),
            SchemeApi::new(Arc::clone(&app_data.scheme_store)),
            ApplicationApi::new(Arc::clone(&app_data.application_store)),
            EmergencyContactApi::new(Arc::clone(&app_data.emergency_contact_store)),
            MarketplaceApi::new(Arc::clone(&app_data.marketplace_store)),
            GrievanceApi::new(Arc::clone(&app_data.grievance_store)),
        ),
        "Military Welfare Portal API",
        "1.0.0",
    );

    let ui = api_service.swagger_ui();

    Route::new()
        .at("/", get(liveness))
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .with(Cors::new())
}
