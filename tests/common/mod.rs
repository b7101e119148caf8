use migration::{Migrator, MigratorTrait};
use poem::test::TestClient;
use poem::Endpoint;
use sea_orm::Database;
use welfare_backend::api::build_app;
use welfare_backend::AppData;

/// Build the full routed app over a fresh in-memory database
pub async fn setup_client() -> TestClient<impl Endpoint> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app_data = AppData::init(db);
    TestClient::new(build_app(&app_data))
}
