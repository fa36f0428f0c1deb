//! Shared test utilities for `PlantPoints`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    entities::{plant, user_plant},
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, Set, prelude::*};
use uuid::Uuid;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a catalog plant with sensible defaults.
///
/// # Defaults
/// * `category`: "vegetables"
/// * `base_points`: 1.0
/// * `emoji`: "🥦"
pub async fn create_test_plant(db: &DatabaseConnection, name: &str) -> Result<plant::Model> {
    create_custom_plant(db, name, "vegetables", 1.0, "🥦").await
}

/// Creates a catalog plant with custom parameters.
pub async fn create_custom_plant(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
    base_points: f64,
    emoji: &str,
) -> Result<plant::Model> {
    let entry = plant::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(name.to_string()),
        category: Set(category.to_string()),
        base_points: Set(base_points),
        emoji: Set(emoji.to_string()),
        created_at: Set(Utc::now()),
    };
    entry.insert(db).await.map_err(Into::into)
}

/// Inserts a logged-plant event with an explicit timestamp. Used to place
/// events inside or outside the week and today windows.
pub async fn log_plant_at(
    db: &DatabaseConnection,
    user_id: &str,
    plant_id: &str,
    points: f64,
    logged_at: DateTime<Utc>,
) -> Result<user_plant::Model> {
    let event = user_plant::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        plant_id: Set(plant_id.to_string()),
        points_earned: Set(points),
        logged_at: Set(logged_at),
        created_at: Set(logged_at),
    };
    event.insert(db).await.map_err(Into::into)
}

/// Sets up a complete test environment with one catalog plant.
/// Returns (db, plant) for common test scenarios.
pub async fn setup_with_plant() -> Result<(DatabaseConnection, plant::Model)> {
    let db = setup_test_db().await?;
    let plant = create_test_plant(&db, "Broccoli").await?;
    Ok((db, plant))
}
