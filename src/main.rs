use poem::{listener::TcpListener, Server};
use sea_orm::Database;

use migration::{Migrator, MigratorTrait};
use welfare_backend::api::build_app;
use welfare_backend::config::{init_logging, Settings};
use welfare_backend::seed::seed_sample_data;
use welfare_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let settings = Settings::from_env();

    // Connect to the store; a failure here is a startup error
    let db = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!(url = %settings.database_url, "connected to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app_data = AppData::init(db.clone());

    // Best-effort, idempotent; failures are logged inside and never fatal
    seed_sample_data(&db, &app_data).await;

    let app = build_app(&app_data);

    let addr = format!("0.0.0.0:{}", settings.port);
    tracing::info!("starting server on http://{}", addr);
    tracing::info!("Swagger UI at http://localhost:{}/swagger", settings.port);

    Server::new(TcpListener::bind(addr))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown signal received");
            },
            Some(std::time::Duration::from_secs(5)),
        )
        .await?;

    // Explicit teardown of the owned store handle
    if let Err(e) = app_data.shutdown().await {
        tracing::error!(error = %e, "failed to close database connection");
    }

    Ok(())
}
