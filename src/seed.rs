use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::types::db::{grievance, marketplace_listing, scheme, user};

/// Populate each collection with sample rows if and only if it is empty.
///
/// Collections are seeded independently; a failure in one is logged and does
/// not block the others or server startup. Re-running against existing data
/// is a no-op per collection.
pub async fn seed_sample_data(db: &DatabaseConnection, app_data: &AppData) {
    if let Err(e) = seed_schemes(db, app_data).await {
        tracing::warn!(error = %e, "scheme seeding failed");
    }
    if let Err(e) = seed_listings(db, app_data).await {
        tracing::warn!(error = %e, "marketplace seeding failed");
    }
    if let Err(e) = seed_grievances(db, app_data).await {
        tracing::warn!(error = %e, "grievance seeding failed");
    }
    if let Err(e) = seed_users(db, app_data).await {
        tracing::warn!(error = %e, "user seeding failed");
    }
}

async fn seed_schemes(db: &DatabaseConnection, app_data: &AppData) -> Result<(), InternalError> {
    let count = scheme::Entity::find()
        .count(db)
        .await
        .map_err(|e| InternalError::database("scheme seed count", e))?;
    if count > 0 {
        return Ok(());
    }

    let samples = [
        (
            "Children Education Scholarship",
            "Annual scholarship covering tuition and books for children of serving and retired personnel.",
            "Children of serving or retired personnel enrolled in a recognised school or college.",
            "education",
        ),
        (
            "War Widow Pension Support",
            "Supplementary monthly pension and one-time grant for war widows.",
            "Widows of personnel killed in action.",
            "pension",
        ),
        (
            "Ex-Servicemen Health Card",
            "Cashless treatment at empanelled hospitals for ex-servicemen and dependents.",
            "Retired personnel and registered dependents.",
            "health",
        ),
        (
            "Resettlement Skill Training",
            "Funded vocational training for personnel within two years of retirement.",
            "Serving personnel with less than two years to retirement.",
            "employment",
        ),
    ];

    for (name, description, eligibility, category) in samples {
        app_data
            .scheme_store
            .create(
                name.to_string(),
                description.to_string(),
                eligibility.to_string(),
                category.to_string(),
            )
            .await?;
    }

    tracing::info!("seeded {} sample schemes", samples.len());
    Ok(())
}

async fn seed_listings(db: &DatabaseConnection, app_data: &AppData) -> Result<(), InternalError> {
    let count = marketplace_listing::Entity::find()
        .count(db)
        .await
        .map_err(|e| InternalError::database("listing seed count", e))?;
    if count > 0 {
        return Ok(());
    }

    app_data
        .marketplace_store
        .create(
            "seed-user-1".to_string(),
            "book".to_string(),
            "CDS exam preparation set".to_string(),
            "Complete set of CDS preparation books, one year old.".to_string(),
            "quartermaster@example.com".to_string(),
        )
        .await?;

    app_data
        .marketplace_store
        .create(
            "seed-user-2".to_string(),
            "equipment".to_string(),
            "Trekking rucksack 80L".to_string(),
            "Service-pattern rucksack in good condition.".to_string(),
            "555-0149".to_string(),
        )
        .await?;

    tracing::info!("seeded 2 sample marketplace listings");
    Ok(())
}

async fn seed_grievances(db: &DatabaseConnection, app_data: &AppData) -> Result<(), InternalError> {
    let count = grievance::Entity::find()
        .count(db)
        .await
        .map_err(|e| InternalError::database("grievance seed count", e))?;
    if count > 0 {
        return Ok(());
    }

    app_data
        .grievance_store
        .create(
            "seed-user-1".to_string(),
            "Canteen card renewal pending".to_string(),
            "Renewal application submitted six weeks ago with no acknowledgement.".to_string(),
            Some("medium".to_string()),
        )
        .await?;

    app_data
        .grievance_store
        .create(
            "seed-user-2".to_string(),
            "Quarters maintenance backlog".to_string(),
            "Repeated requests for electrical repairs in married quarters ignored.".to_string(),
            Some("high".to_string()),
        )
        .await?;

    tracing::info!("seeded 2 sample grievances");
    Ok(())
}

async fn seed_users(db: &DatabaseConnection, app_data: &AppData) -> Result<(), InternalError> {
    let count = user::Entity::find()
        .count(db)
        .await
        .map_err(|e| InternalError::database("user seed count", e))?;
    if count > 0 {
        return Ok(());
    }

    let samples = [
        ("admin@welfare.mil", "admin"),
        ("officer@welfare.mil", "officer"),
        ("family@welfare.mil", "family"),
    ];

    for (email, role) in samples {
        app_data
            .credential_store
            .register(
                email.to_string(),
                "password".to_string(),
                Some(role.to_string()),
            )
            .await?;
    }

    tracing::info!("seeded {} sample users", samples.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_test_db() -> (DatabaseConnection, AppData) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let app_data = AppData::init(db.clone());
        (db, app_data)
    }

    async fn row_counts(db: &DatabaseConnection) -> (u64, u64, u64, u64) {
        (
            scheme::Entity::find().count(db).await.unwrap(),
            marketplace_listing::Entity::find().count(db).await.unwrap(),
            grievance::Entity::find().count(db).await.unwrap(),
            user::Entity::find().count(db).await.unwrap(),
        )
    }

    #[tokio::test]
    async fn test_seed_populates_empty_collections() {
        let (db, app_data) = setup_test_db().await;

        seed_sample_data(&db, &app_data).await;

        assert_eq!(row_counts(&db).await, (4, 2, 2, 3));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (db, app_data) = setup_test_db().await;

        seed_sample_data(&db, &app_data).await;
        let first = row_counts(&db).await;

        seed_sample_data(&db, &app_data).await;
        let second = row_counts(&db).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_seed_skips_nonempty_collection_only() {
        let (db, app_data) = setup_test_db().await;

        // Pre-populate one collection; the others must still be seeded
        app_data
            .scheme_store
            .create(
                "Existing".to_string(),
                "d".to_string(),
                "e".to_string(),
                "c".to_string(),
            )
            .await
            .expect("Failed to create scheme");

        seed_sample_data(&db, &app_data).await;

        assert_eq!(row_counts(&db).await, (1, 2, 2, 3));
    }

    #[tokio::test]
    async fn test_seeded_users_can_log_in() {
        let (db, app_data) = setup_test_db().await;

        seed_sample_data(&db, &app_data).await;

        let user = app_data
            .credential_store
            .verify_credentials("admin@welfare.mil", "password")
            .await
            .expect("Seeded admin should verify");
        assert_eq!(user.role, "admin");
    }
}
