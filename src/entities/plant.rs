//! Plant entity - Represents the shared plant catalog.
//!
//! The catalog is read-only reference data: rows are seeded from the
//! configuration file and never modified by user actions. Each plant
//! carries the points awarded when it is logged.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plant catalog database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plants")]
pub struct Model {
    /// Opaque unique identifier for the plant
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Human-readable name of the plant (e.g., "Broccoli", "Lentils")
    pub name: String,
    /// Catalog category for grouping (e.g., "vegetables", "legumes")
    pub category: String,
    /// Points awarded when this plant is logged; never negative
    pub base_points: f64,
    /// Display glyph shown next to the name
    pub emoji: String,
    /// When this catalog entry was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Plant and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One plant appears in many logged events
    #[sea_orm(has_many = "super::user_plant::Entity")]
    UserPlants,
    /// One plant can belong to many meals
    #[sea_orm(has_many = "super::meal_plant::Entity")]
    MealPlants,
}

impl Related<super::user_plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPlants.def()
    }
}

impl Related<super::meal_plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
