//! Plant catalog access and seeding.
//!
//! The catalog is shared read-only reference data. User actions never
//! modify it; rows enter through [`seed_plant_catalog`], which is driven
//! by the configuration file at startup.

use crate::{
    config::plants::PlantSeed,
    entities::{Plant, plant},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Retrieves the full plant catalog, ordered by category then name.
pub async fn get_all_plants(db: &DatabaseConnection) -> Result<Vec<plant::Model>> {
    Plant::find()
        .order_by_asc(plant::Column::Category)
        .order_by_asc(plant::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a catalog plant by its id, returning None if unknown.
pub async fn get_plant_by_id(
    db: &DatabaseConnection,
    plant_id: &str,
) -> Result<Option<plant::Model>> {
    Plant::find_by_id(plant_id).one(db).await.map_err(Into::into)
}

/// Groups catalog plants by category for display.
///
/// Categories come out in lexicographic order; plants within a category
/// keep the order of the input slice.
#[must_use]
pub fn plants_by_category(plants: &[plant::Model]) -> BTreeMap<String, Vec<plant::Model>> {
    let mut categories: BTreeMap<String, Vec<plant::Model>> = BTreeMap::new();
    for plant in plants {
        categories
            .entry(plant.category.clone())
            .or_default()
            .push(plant.clone());
    }
    categories
}

/// Seeds the catalog from configuration, inserting entries that do not yet
/// exist by name. Safe to run on every startup; returns the number of
/// plants inserted.
pub async fn seed_plant_catalog(db: &DatabaseConnection, seeds: &[PlantSeed]) -> Result<usize> {
    let mut inserted = 0;

    for seed in seeds {
        if !seed.base_points.is_finite() || seed.base_points < 0.0 {
            return Err(Error::InvalidPoints {
                amount: seed.base_points,
            });
        }

        let existing = Plant::find()
            .filter(plant::Column::Name.eq(&seed.name))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let entry = plant::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(seed.name.clone()),
            category: Set(seed.category.clone()),
            base_points: Set(seed.base_points),
            emoji: Set(seed.emoji.clone()),
            created_at: Set(Utc::now()),
        };
        entry.insert(db).await?;
        inserted += 1;
    }

    Ok(inserted)
}
