//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod meal;
pub mod meal_plant;
pub mod plant;
pub mod user_plant;

// Re-export specific types to avoid conflicts
pub use meal::{Column as MealColumn, Entity as Meal, Model as MealModel};
pub use meal_plant::{Column as MealPlantColumn, Entity as MealPlant, Model as MealPlantModel};
pub use plant::{Column as PlantColumn, Entity as Plant, Model as PlantModel};
pub use user_plant::{Column as UserPlantColumn, Entity as UserPlant, Model as UserPlantModel};
