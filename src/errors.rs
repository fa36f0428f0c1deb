//! Unified error types for the plant tracking core.
//!
//! Every fallible operation in the crate returns [`Result`]. Persistence
//! failures keep the driver's message; a missing signed-in user is its own
//! variant so callers can distinguish it from storage problems. Malformed
//! plant ids are never an error anywhere in the crate - they simply match
//! zero rows.

use thiserror::Error;

/// Unified error type for all plant tracking operations
#[derive(Debug, Error)]
pub enum Error {
    /// No user is signed in; log/remove/refresh all require one
    #[error("Not authenticated")]
    Auth,

    /// The remote store rejected a read or write; message passes through
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Points must be finite and non-negative
    #[error("Invalid points amount: {amount}")]
    InvalidPoints {
        /// The rejected amount
        amount: f64,
    },

    /// A meal write referenced an id the signed-in user does not own
    #[error("Meal not found: {id}")]
    MealNotFound {
        /// The meal id that matched no owned row
        id: String,
    },

    /// Seed file or environment configuration problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Environment variable error during bootstrap
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
