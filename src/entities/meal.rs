//! Meal entity - A user-defined bundle of plants logged together.
//!
//! Meals are owned by the user who created them and are updated wholesale;
//! deleting a meal never touches the user's logged-plant history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    /// Unique identifier for the meal
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Id of the user who owns this meal
    pub user_id: String,
    /// Human-readable name of the meal (e.g., "Monday stir-fry")
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Display glyph shown next to the name
    pub emoji: String,
    /// When the meal was created
    pub created_at: DateTimeUtc,
    /// When the meal was last rewritten
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Meal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One meal has many membership rows
    #[sea_orm(has_many = "super::meal_plant::Entity")]
    MealPlants,
}

impl Related<super::meal_plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
