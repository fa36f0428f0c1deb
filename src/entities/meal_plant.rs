//! Meal membership entity - Joins meals to the plants they contain.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal-to-plant membership database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_plants")]
pub struct Model {
    /// Unique identifier for the membership row
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Id of the meal this row belongs to
    pub meal_id: String,
    /// Id of the referenced catalog plant
    pub plant_id: String,
    /// When the plant was added to the meal; orders plants within a meal
    pub created_at: DateTimeUtc,
}

/// Defines relationships between membership rows and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each membership row belongs to one meal
    #[sea_orm(
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id"
    )]
    Meal,
    /// Each membership row references one catalog plant
    #[sea_orm(
        belongs_to = "super::plant::Entity",
        from = "Column::PlantId",
        to = "super::plant::Column::Id"
    )]
    Plant,
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl Related<super::plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
