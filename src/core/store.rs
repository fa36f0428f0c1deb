//! Progress store - owns the signed-in user's weekly aggregate.
//!
//! The store never mutates its summary optimistically: every write goes to
//! the database first, then the whole aggregate is discarded and re-derived
//! from a fresh fetch. A failed operation therefore leaves the previously
//! presented summary (and state) untouched.

use crate::{
    core::progress::{self, WeeklyProgress},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Lifecycle of the held aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No aggregate has been derived yet (fresh store or after sign-out)
    Uninitialized,
    /// A refresh is in flight
    Loading,
    /// The held aggregate reflects the last successful fetch
    Ready,
}

/// Holds the authoritative weekly summary for one signed-in session.
#[derive(Debug)]
pub struct ProgressStore {
    db: DatabaseConnection,
    user_id: Option<String>,
    state: StoreState,
    progress: WeeklyProgress,
}

impl ProgressStore {
    /// Creates a store with no signed-in user.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            user_id: None,
            state: StoreState::Uninitialized,
            progress: WeeklyProgress {
                total_points: 0.0,
                today_points: 0.0,
                unique_plants: 0,
                logged_plants: Vec::new(),
            },
        }
    }

    /// Signs a user in, discarding any aggregate held for a previous user.
    pub fn sign_in(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
        self.state = StoreState::Uninitialized;
        self.progress = WeeklyProgress::default();
    }

    /// Signs the current user out and clears the held aggregate.
    pub fn sign_out(&mut self) {
        self.user_id = None;
        self.state = StoreState::Uninitialized;
        self.progress = WeeklyProgress::default();
    }

    /// Id of the signed-in user, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> StoreState {
        self.state
    }

    /// The last successfully derived weekly summary.
    #[must_use]
    pub const fn progress(&self) -> &WeeklyProgress {
        &self.progress
    }

    fn require_user(&self) -> Result<String> {
        self.user_id.clone().ok_or(Error::Auth)
    }

    /// Re-fetches this week's events and replaces the held aggregate.
    /// On failure the previous aggregate and state are restored.
    pub async fn refresh(&mut self) -> Result<()> {
        let user_id = self.require_user()?;
        let previous = std::mem::replace(&mut self.state, StoreState::Loading);

        match progress::fetch_weekly_progress(&self.db, &user_id).await {
            Ok(fresh) => {
                self.progress = fresh;
                self.state = StoreState::Ready;
                Ok(())
            }
            Err(err) => {
                self.state = previous;
                Err(err)
            }
        }
    }

    /// Logs a plant for the signed-in user, then refreshes the aggregate.
    pub async fn log_plant(&mut self, plant_id: &str, points_earned: f64) -> Result<()> {
        let user_id = self.require_user()?;
        progress::log_plant(&self.db, &user_id, plant_id, points_earned).await?;
        self.refresh().await
    }

    /// Removes all of this week's events for a plant, then refreshes.
    pub async fn remove_plant(&mut self, plant_id: &str) -> Result<()> {
        let user_id = self.require_user()?;
        progress::remove_plant(&self.db, &user_id, plant_id).await?;
        self.refresh().await
    }
}
