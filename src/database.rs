use std::str::FromStr;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::{config::DatabaseConfig, error::AppError};

static MIGRATOR: Migrator = sqlx::migrate!();

const SEED_CATALOG: &str = include_str!("../seed/catalog.sql");

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    prepare(&pool, config.seed).await?;

    tracing::info!(
        "Database connection established with {} max connections",
        config.max_connections
    );

    Ok(pool)
}

/// A private, migrated and seeded in-memory store. The single connection is
/// never recycled, because closing it would drop the database.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    prepare(&pool, true).await?;
    Ok(pool)
}

async fn prepare(pool: &SqlitePool, seed: bool) -> Result<(), AppError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::internal(format!("Failed to run migrations: {e}")))?;

    if seed {
        seed_catalog(pool).await?;
    }
    Ok(())
}

/// Load the fixture catalog, unless the store already holds products.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::debug!(existing, "Catalog already populated, skipping seed");
        return Ok(());
    }

    sqlx::raw_sql(SEED_CATALOG).execute(pool).await?;
    tracing::info!("Seeded fixture catalog");
    Ok(())
}

pub async fn check_health(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
