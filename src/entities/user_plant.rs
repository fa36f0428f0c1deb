//! Logged-plant entity - One row per time a user logs a plant.
//!
//! The same `(user_id, plant_id)` pair may appear many times across weeks,
//! or within one week when a plant is removed and re-logged. Weekly
//! aggregation counts each plant id at most once; removal deletes all of
//! the current week's rows for the pair.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Logged plant event database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_plants")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Id of the user who logged the plant
    pub user_id: String,
    /// Id of the catalog plant that was logged
    pub plant_id: String,
    /// Points captured at logging time (normally the plant's `base_points`)
    pub points_earned: f64,
    /// When the user logged the plant
    pub logged_at: DateTimeUtc,
    /// When this row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between logged events and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each event references one catalog plant
    #[sea_orm(
        belongs_to = "super::plant::Entity",
        from = "Column::PlantId",
        to = "super::plant::Column::Id"
    )]
    Plant,
}

impl Related<super::plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
