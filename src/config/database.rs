//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always
//! matches the Rust struct definitions without manual SQL.

use crate::entities::{Meal, MealPlant, Plant, UserPlant};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file that is created on first use.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/plant_points.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions. Safe to call on every
/// startup; existing tables are left alone.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    // The catalog table comes first so membership and event rows can
    // reference it
    let mut plant_table = schema.create_table_from_entity(Plant);
    plant_table.if_not_exists();
    db.execute(builder.build(&plant_table)).await?;

    let mut user_plant_table = schema.create_table_from_entity(UserPlant);
    user_plant_table.if_not_exists();
    db.execute(builder.build(&user_plant_table)).await?;

    let mut meal_table = schema.create_table_from_entity(Meal);
    meal_table.if_not_exists();
    db.execute(builder.build(&meal_table)).await?;

    let mut meal_plant_table = schema.create_table_from_entity(MealPlant);
    meal_plant_table.if_not_exists();
    db.execute(builder.build(&meal_plant_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        meal::Model as MealModel, meal_plant::Model as MealPlantModel,
        plant::Model as PlantModel, user_plant::Model as UserPlantModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Each table exists and is queryable
        let _: Vec<PlantModel> = Plant::find().limit(1).all(&db).await?;
        let _: Vec<UserPlantModel> = UserPlant::find().limit(1).all(&db).await?;
        let _: Vec<MealModel> = Meal::find().limit(1).all(&db).await?;
        let _: Vec<MealPlantModel> = MealPlant::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_twice_is_harmless() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<PlantModel> = Plant::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[test]
    fn test_get_database_url_falls_back_to_sqlite() {
        // Only meaningful when DATABASE_URL is unset in the test env
        if std::env::var("DATABASE_URL").is_err() {
            assert!(get_database_url().starts_with("sqlite://"));
        }
    }
}
