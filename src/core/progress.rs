//! Weekly progress aggregation and logged-plant operations.
//!
//! A user's week is summarized from the raw `user_plants` rows logged
//! since Monday midnight: each plant id counts at most once toward the
//! totals no matter how many times it was logged, and "today" is the
//! subset of retained entries stamped after local midnight. The
//! aggregation itself is a pure function so the same summary can be
//! re-derived from any already-fetched event list.

use crate::{
    core::week,
    entities::{Plant, UserPlant, user_plant},
    errors::{Error, Result},
};
use chrono::{DateTime, Local, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use std::collections::HashSet;
use uuid::Uuid;

/// One logged plant joined with its catalog display data.
///
/// `points` is the value captured at logging time, not the catalog's
/// current `base_points`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedPlant {
    /// Id of the catalog plant
    pub plant_id: String,
    /// Catalog name at fetch time
    pub plant_name: String,
    /// Catalog emoji at fetch time
    pub emoji: String,
    /// Points captured when the plant was logged
    pub points: f64,
    /// When the retained event was logged
    pub logged_at: DateTime<Utc>,
}

/// Derived weekly summary; recomputed wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeeklyProgress {
    /// Sum of points over unique plants logged this week
    pub total_points: f64,
    /// Subset of `total_points` from entries logged today
    pub today_points: f64,
    /// Number of distinct plant ids logged this week
    pub unique_plants: usize,
    /// One entry per distinct plant id, newest first
    pub logged_plants: Vec<LoggedPlant>,
}

/// Aggregates one week's worth of logged-plant entries into a summary.
///
/// Walks the input once keeping the first entry seen for each plant id;
/// later duplicates are ignored for all point accounting. The retained
/// entries are then summed (total, and the subset stamped at or after
/// `today_start`) and stably sorted newest-first, so entries with equal
/// timestamps keep their input order.
///
/// An empty input yields the all-zero summary. The result is a pure
/// function of the input sequence and `today_start`.
#[must_use]
pub fn aggregate_week(entries: &[LoggedPlant], today_start: DateTime<Utc>) -> WeeklyProgress {
    let mut seen = HashSet::new();
    let mut unique: Vec<LoggedPlant> = Vec::new();
    for entry in entries {
        if seen.insert(entry.plant_id.clone()) {
            unique.push(entry.clone());
        }
    }

    let total_points = unique.iter().map(|p| p.points).sum();
    let today_points = unique
        .iter()
        .filter(|p| p.logged_at >= today_start)
        .map(|p| p.points)
        .sum();

    // Vec::sort_by is stable; ties keep input order
    unique.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));

    WeeklyProgress {
        total_points,
        today_points,
        unique_plants: unique.len(),
        logged_plants: unique,
    }
}

/// Fetches the signed-in user's events for the current week, joined with
/// the plant catalog for display data, and aggregates them.
///
/// Rows are fetched oldest-first so that when a plant was logged more than
/// once this week the retained entry is the earliest log. Events whose
/// catalog plant has disappeared are skipped.
pub async fn fetch_weekly_progress(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<WeeklyProgress> {
    let now = Local::now();
    let week_start = week::week_start(&now).with_timezone(&Utc);
    let today_start = week::today_start(&now).with_timezone(&Utc);

    let rows = UserPlant::find()
        .filter(user_plant::Column::UserId.eq(user_id))
        .filter(user_plant::Column::LoggedAt.gte(week_start))
        .order_by_asc(user_plant::Column::LoggedAt)
        .find_also_related(Plant)
        .all(db)
        .await?;

    let entries: Vec<LoggedPlant> = rows
        .into_iter()
        .filter_map(|(event, plant)| {
            plant.map(|plant| LoggedPlant {
                plant_id: event.plant_id,
                plant_name: plant.name,
                emoji: plant.emoji,
                points: event.points_earned,
                logged_at: event.logged_at,
            })
        })
        .collect();

    Ok(aggregate_week(&entries, today_start))
}

/// Records one logged-plant event stamped with the current instant.
///
/// Duplicate logs for the same plant within a week are written as-is; the
/// aggregation absorbs them at read time. Points must be finite and
/// non-negative.
pub async fn log_plant(
    db: &DatabaseConnection,
    user_id: &str,
    plant_id: &str,
    points_earned: f64,
) -> Result<user_plant::Model> {
    if !points_earned.is_finite() || points_earned < 0.0 {
        return Err(Error::InvalidPoints {
            amount: points_earned,
        });
    }

    let now = Utc::now();
    let event = user_plant::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        plant_id: Set(plant_id.to_string()),
        points_earned: Set(points_earned),
        logged_at: Set(now),
        created_at: Set(now),
    };

    event.insert(db).await.map_err(Into::into)
}

/// Removes a plant from the current week by bulk-deleting every event for
/// the `(user, plant)` pair since Monday midnight. Events from previous
/// weeks are untouched. Returns the number of rows deleted; an unknown
/// plant id matches zero rows and is not an error.
pub async fn remove_plant(db: &DatabaseConnection, user_id: &str, plant_id: &str) -> Result<u64> {
    let week_start = week::week_start(&Local::now()).with_timezone(&Utc);

    let result = UserPlant::delete_many()
        .filter(user_plant::Column::UserId.eq(user_id))
        .filter(user_plant::Column::PlantId.eq(plant_id))
        .filter(user_plant::Column::LoggedAt.gte(week_start))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
