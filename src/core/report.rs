//! Weekly goal reporting and the daily breakdown.
//!
//! Turns a derived weekly summary into presentation-ready data: progress
//! toward the weekly points goal, a text progress bar, and per-day point
//! buckets for the Monday..Sunday of the current week.

use crate::core::{
    progress::{LoggedPlant, WeeklyProgress},
    week,
};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};

/// Weekly diversity target: 30+ unique plant points for the week.
pub const WEEKLY_GOAL_POINTS: f64 = 30.0;

/// Progress toward the weekly goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Points accumulated so far this week
    pub total_points: f64,
    /// The goal being worked toward
    pub goal_points: f64,
    /// Percentage of the goal reached, clamped to 0-100
    pub progress_percent: f64,
    /// Whether the goal has been met or exceeded
    pub goal_reached: bool,
}

/// Points logged on one day of the current week.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPoints {
    /// The calendar day
    pub date: NaiveDate,
    /// Sum of points over the summary entries logged that day
    pub points: f64,
    /// Whether this bucket is the current day
    pub is_today: bool,
}

/// Evaluates a weekly summary against [`WEEKLY_GOAL_POINTS`].
#[must_use]
pub fn goal_progress(progress: &WeeklyProgress) -> GoalProgress {
    GoalProgress {
        total_points: progress.total_points,
        goal_points: WEEKLY_GOAL_POINTS,
        progress_percent: progress_percent(progress.total_points, WEEKLY_GOAL_POINTS),
        goal_reached: progress.total_points >= WEEKLY_GOAL_POINTS,
    }
}

/// Percentage of `goal` covered by `total`, clamped to 0-100.
/// A zero goal reports zero progress.
#[must_use]
pub fn progress_percent(total: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }

    ((total / goal) * 100.0).clamp(0.0, 100.0)
}

/// Renders a text progress bar like `[████░░░░░░] 40.0%`.
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: usize) -> String {
    let clamped = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped ∈ [0, 100] and bar_length is small, so the
    // product is in [0, bar_length]; truncation is intentional
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * bar_length as f64).round() as usize;
    let empty = bar_length.saturating_sub(filled);

    format!(
        "[{}{}] {progress_percent:.1}%",
        "█".repeat(filled),
        "░".repeat(empty)
    )
}

/// Buckets the summary's entries into the seven days of the current week.
///
/// Always returns exactly seven buckets, Monday through Sunday, in the
/// timezone of `now`; days without entries carry zero points. Input is
/// the deduplicated entry list, so a plant re-logged later in the week
/// counts on the day of its retained entry.
#[must_use]
pub fn daily_breakdown<Tz: TimeZone>(
    logged_plants: &[LoggedPlant],
    now: &DateTime<Tz>,
) -> Vec<DayPoints> {
    let tz = now.timezone();
    let monday = week::week_start(now).date_naive();
    let today = now.date_naive();

    (0..7u64)
        .map(|offset| {
            let date = monday + Days::new(offset);
            let start = week::day_start(date, &tz).with_timezone(&Utc);
            let end = week::day_start(date + Days::new(1), &tz).with_timezone(&Utc);

            let points = logged_plants
                .iter()
                .filter(|p| p.logged_at >= start && p.logged_at < end)
                .map(|p| p.points)
                .sum();

            DayPoints {
                date,
                points,
                is_today: date == today,
            }
        })
        .collect()
}

/// Formats a weekly summary into a human-readable block.
#[must_use]
pub fn format_weekly_summary(progress: &WeeklyProgress, goal: &GoalProgress) -> String {
    use std::fmt::Write;

    let mut summary = format!(
        "This Week's Progress - {:.2} / {:.0} points\n",
        goal.total_points, goal.goal_points
    );

    // write! is infallible when writing to String, so unwrap is safe
    writeln!(summary, "  {}", format_progress_bar(goal.progress_percent, 10)).unwrap();
    writeln!(
        summary,
        "  {} unique plants | {:.2} points today",
        progress.unique_plants, progress.today_points
    )
    .unwrap();
    if goal.goal_reached {
        writeln!(summary, "  Goal reached!").unwrap();
    }

    for plant in &progress.logged_plants {
        writeln!(
            summary,
            "  {} {} - {:.1} pts ({})",
            plant.emoji,
            plant.plant_name,
            plant.points,
            plant.logged_at.format("%Y-%m-%d %H:%M")
        )
        .unwrap();
    }

    summary
}

/// Formats the daily breakdown as one line per day.
#[must_use]
pub fn format_daily_breakdown(days: &[DayPoints]) -> String {
    use std::fmt::Write;

    let mut out = String::from("Daily Breakdown\n");
    for day in days {
        // write! is infallible when writing to String, so unwrap is safe
        writeln!(
            out,
            "  {} {:>6.1}{}",
            day.date.format("%a"),
            day.points,
            if day.is_today { "  (today)" } else { "" }
        )
        .unwrap();
    }
    out
}
