//! Week and day boundary computation.
//!
//! Weekly totals cover the half-open window from the most recent Monday at
//! local midnight; "today" is the half-open window from local midnight of
//! the current day. Both boundaries are pure functions of the given
//! instant and its timezone, so the same values can be used as a query
//! lower bound and to re-partition an already-fetched event list.

use chrono::{DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Returns the start of the week containing `now`: the most recent Monday
/// at 00:00:00 in `now`'s timezone. On a Monday this is today's midnight;
/// on a Sunday it is the Monday six days prior.
pub fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let days_back = u64::from(now.weekday().num_days_from_monday());
    let monday = now.date_naive() - Days::new(days_back);
    day_start(monday, &now.timezone())
}

/// Returns today's midnight in `now`'s timezone.
pub fn today_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    day_start(now.date_naive(), &now.timezone())
}

/// Resolves local midnight of `date` to a concrete instant.
///
/// DST transitions can make a local midnight ambiguous or nonexistent.
/// Ambiguous midnights resolve to the earlier instant; when a forward jump
/// swallows midnight the day starts at the first representable local time
/// after the gap.
pub fn day_start<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            let mut candidate = midnight;
            // DST gaps are at most a few hours; probe in half-hour steps
            for _ in 0..48 {
                candidate = candidate + Duration::minutes(30);
                if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
                    return dt;
                }
            }
            tz.from_utc_datetime(&midnight)
        }
    }
}
