//! Meal business logic - user-defined plant bundles.
//!
//! Meals are pure persistence with one derived value: a meal's
//! `total_points` is the sum of `base_points` over its referenced catalog
//! plants, not anything from the user's logged history. Updates are
//! wholesale: the plant set is replaced, never patched. Deleting a meal
//! never touches `user_plants`.

use crate::{
    entities::{Meal, MealPlant, Plant, meal, meal_plant, plant},
    errors::{Error, Result},
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use uuid::Uuid;

/// A meal joined with its catalog plants and derived point total.
#[derive(Debug, Clone, PartialEq)]
pub struct MealWithPlants {
    /// The meal row itself
    pub meal: meal::Model,
    /// Referenced catalog plants, in the order they were added
    pub plants: Vec<plant::Model>,
    /// Sum of `base_points` over `plants`
    pub total_points: f64,
}

/// Sums the catalog points of a meal's plants.
#[must_use]
pub fn meal_total_points(plants: &[plant::Model]) -> f64 {
    plants.iter().map(|p| p.base_points).sum()
}

/// Creates a meal with the given plant set and returns the joined view.
///
/// The name must be non-empty after trimming. Plant ids that do not exist
/// in the catalog are rejected by the database's referential checks.
pub async fn create_meal(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    description: &str,
    emoji: &str,
    plant_ids: &[String],
) -> Result<MealWithPlants> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Meal name cannot be empty".to_string(),
        });
    }

    let now = Utc::now();
    let meal_id = Uuid::new_v4().to_string();

    let txn = db.begin().await?;

    let new_meal = meal::ActiveModel {
        id: Set(meal_id.clone()),
        user_id: Set(user_id.to_string()),
        name: Set(name.trim().to_string()),
        description: Set(description.to_string()),
        emoji: Set(emoji.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = new_meal.insert(&txn).await?;

    insert_memberships(&txn, &meal_id, plant_ids, now).await?;

    txn.commit().await?;

    let plants = plants_for_meal(db, &created.id).await?;
    let total_points = meal_total_points(&plants);
    Ok(MealWithPlants {
        meal: created,
        plants,
        total_points,
    })
}

/// Rewrites a meal wholesale: metadata, then the full plant set.
///
/// Only the owner can update a meal; an unknown or foreign `meal_id`
/// yields [`Error::MealNotFound`].
pub async fn update_meal(
    db: &DatabaseConnection,
    user_id: &str,
    meal_id: &str,
    name: &str,
    description: &str,
    emoji: &str,
    plant_ids: &[String],
) -> Result<MealWithPlants> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Meal name cannot be empty".to_string(),
        });
    }

    let now = Utc::now();
    let txn = db.begin().await?;

    let existing = Meal::find_by_id(meal_id)
        .filter(meal::Column::UserId.eq(user_id))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::MealNotFound {
            id: meal_id.to_string(),
        })?;

    let mut active: meal::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.description = Set(description.to_string());
    active.emoji = Set(emoji.to_string());
    active.updated_at = Set(now);
    let updated = active.update(&txn).await?;

    MealPlant::delete_many()
        .filter(meal_plant::Column::MealId.eq(meal_id))
        .exec(&txn)
        .await?;
    insert_memberships(&txn, meal_id, plant_ids, now).await?;

    txn.commit().await?;

    let plants = plants_for_meal(db, meal_id).await?;
    let total_points = meal_total_points(&plants);
    Ok(MealWithPlants {
        meal: updated,
        plants,
        total_points,
    })
}

/// Deletes a meal and its membership rows. Only the owner can delete;
/// an unknown or foreign `meal_id` yields [`Error::MealNotFound`].
pub async fn delete_meal(db: &DatabaseConnection, user_id: &str, meal_id: &str) -> Result<()> {
    let txn = db.begin().await?;

    let existing = Meal::find_by_id(meal_id)
        .filter(meal::Column::UserId.eq(user_id))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::MealNotFound {
            id: meal_id.to_string(),
        })?;

    MealPlant::delete_many()
        .filter(meal_plant::Column::MealId.eq(meal_id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Retrieves the user's meals, newest first, each joined with its plants.
pub async fn fetch_meals_with_plants(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<MealWithPlants>> {
    let meals = Meal::find()
        .filter(meal::Column::UserId.eq(user_id))
        .order_by_desc(meal::Column::CreatedAt)
        .all(db)
        .await?;

    let mut result = Vec::with_capacity(meals.len());
    for meal in meals {
        let plants = plants_for_meal(db, &meal.id).await?;
        let total_points = meal_total_points(&plants);
        result.push(MealWithPlants {
            meal,
            plants,
            total_points,
        });
    }
    Ok(result)
}

/// Loads a meal's plants in the order they were added to the meal.
async fn plants_for_meal(db: &DatabaseConnection, meal_id: &str) -> Result<Vec<plant::Model>> {
    let rows = MealPlant::find()
        .filter(meal_plant::Column::MealId.eq(meal_id))
        .order_by_asc(meal_plant::Column::CreatedAt)
        .find_also_related(Plant)
        .all(db)
        .await?;

    Ok(rows.into_iter().filter_map(|(_, plant)| plant).collect())
}

async fn insert_memberships<C>(
    db: &C,
    meal_id: &str,
    plant_ids: &[String],
    base: DateTime<Utc>,
) -> Result<()>
where
    C: ConnectionTrait,
{
    for (index, plant_id) in plant_ids.iter().enumerate() {
        // Staggered stamps keep the caller's ordering sortable
        #[allow(clippy::cast_possible_wrap)]
        let added_at = base + Duration::milliseconds(index as i64);
        let row = meal_plant::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            meal_id: Set(meal_id.to_string()),
            plant_id: Set(plant_id.clone()),
            created_at: Set(added_at),
        };
        row.insert(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{core::progress, test_utils::*};

    #[tokio::test]
    async fn test_meal_total_points_sums_catalog_points() -> Result<()> {
        let db = setup_test_db().await?;
        let broccoli = create_custom_plant(&db, "Broccoli", "vegetables", 1.0, "🥦").await?;
        let almond = create_custom_plant(&db, "Almond", "nuts", 2.5, "🌰").await?;

        assert_eq!(meal_total_points(&[broccoli, almond]), 3.5);
        assert_eq!(meal_total_points(&[]), 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_meal_with_plants() -> Result<()> {
        let db = setup_test_db().await?;
        let broccoli = create_custom_plant(&db, "Broccoli", "vegetables", 1.0, "🥦").await?;
        let almond = create_custom_plant(&db, "Almond", "nuts", 2.5, "🌰").await?;

        let created = create_meal(
            &db,
            "user1",
            "Stir-fry",
            "Weeknight default",
            "🥘",
            &[almond.id.clone(), broccoli.id.clone()],
        )
        .await?;

        assert_eq!(created.meal.name, "Stir-fry");
        assert_eq!(created.meal.user_id, "user1");
        assert_eq!(created.total_points, 3.5);
        // Plants come back in the order they were added
        let names: Vec<&str> = created.plants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Almond", "Broccoli"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_meal_rejects_empty_name() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_meal(&db, "user1", "   ", "", "🥘", &[]).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_meal_without_plants() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_meal(&db, "user1", "Empty", "", "🍽", &[]).await?;
        assert!(created.plants.is_empty());
        assert_eq!(created.total_points, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_meals_newest_first_and_scoped_to_user() -> Result<()> {
        let db = setup_test_db().await?;

        create_meal(&db, "user1", "First", "", "🍲", &[]).await?;
        create_meal(&db, "user1", "Second", "", "🥗", &[]).await?;
        create_meal(&db, "user2", "Other", "", "🍛", &[]).await?;

        let meals = fetch_meals_with_plants(&db, "user1").await?;
        let names: Vec<&str> = meals.iter().map(|m| m.meal.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_meal_replaces_plant_set() -> Result<()> {
        let db = setup_test_db().await?;
        let broccoli = create_custom_plant(&db, "Broccoli", "vegetables", 1.0, "🥦").await?;
        let almond = create_custom_plant(&db, "Almond", "nuts", 2.5, "🌰").await?;

        let created = create_meal(&db, "user1", "Stir-fry", "", "🥘", &[broccoli.id.clone()]).await?;
        assert_eq!(created.total_points, 1.0);

        let updated = update_meal(
            &db,
            "user1",
            &created.meal.id,
            "Stir-fry v2",
            "now with nuts",
            "🥘",
            &[almond.id.clone()],
        )
        .await?;

        assert_eq!(updated.meal.name, "Stir-fry v2");
        assert_eq!(updated.meal.description, "now with nuts");
        assert_eq!(updated.total_points, 2.5);
        assert_eq!(updated.plants.len(), 1);
        assert_eq!(updated.plants[0].name, "Almond");
        assert!(updated.meal.updated_at >= updated.meal.created_at);

        // The old membership rows are gone
        let memberships = MealPlant::find().all(&db).await?;
        assert_eq!(memberships.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_meal_checks_ownership() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_meal(&db, "user1", "Mine", "", "🍲", &[]).await?;

        let result = update_meal(&db, "user2", &created.meal.id, "Stolen", "", "🍲", &[]).await;
        assert!(matches!(result.unwrap_err(), Error::MealNotFound { id: _ }));

        let result = update_meal(&db, "user1", "no-such-meal", "Ghost", "", "🍲", &[]).await;
        assert!(matches!(result.unwrap_err(), Error::MealNotFound { id: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_meal_removes_memberships() -> Result<()> {
        let db = setup_test_db().await?;
        let broccoli = create_custom_plant(&db, "Broccoli", "vegetables", 1.0, "🥦").await?;

        let created = create_meal(&db, "user1", "Stir-fry", "", "🥘", &[broccoli.id.clone()]).await?;
        delete_meal(&db, "user1", &created.meal.id).await?;

        assert!(fetch_meals_with_plants(&db, "user1").await?.is_empty());
        assert!(MealPlant::find().all(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_meal_checks_ownership() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_meal(&db, "user1", "Mine", "", "🍲", &[]).await?;

        let result = delete_meal(&db, "user2", &created.meal.id).await;
        assert!(matches!(result.unwrap_err(), Error::MealNotFound { id: _ }));

        // The meal is still there for its owner
        assert_eq!(fetch_meals_with_plants(&db, "user1").await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_meal_leaves_logged_history_alone() -> Result<()> {
        let db = setup_test_db().await?;
        let broccoli = create_custom_plant(&db, "Broccoli", "vegetables", 1.0, "🥦").await?;

        progress::log_plant(&db, "user1", &broccoli.id, broccoli.base_points).await?;
        let created = create_meal(&db, "user1", "Stir-fry", "", "🥘", &[broccoli.id.clone()]).await?;
        delete_meal(&db, "user1", &created.meal.id).await?;

        let weekly = progress::fetch_weekly_progress(&db, "user1").await?;
        assert_eq!(weekly.unique_plants, 1);

        Ok(())
    }
}
