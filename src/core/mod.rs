//! Core business logic - framework-agnostic plant tracking operations.
//! Window math and aggregation are pure functions; everything touching the
//! database is an async function over a `DatabaseConnection`.

pub mod meal;
pub mod plant;
pub mod progress;
pub mod report;
pub mod store;
pub mod week;
