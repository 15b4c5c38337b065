//! Time source and calendar-day policy.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_DAY: i64 = 24 * 60 * MS_PER_MINUTE;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Which timezone decides where one day ends and the next begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    #[default]
    Local,
    Utc,
    /// Seconds east of UTC.
    FixedOffset(i32),
}

/// Calendar day containing `now` under `boundary`.
pub fn calendar_day(now: DateTime<Utc>, boundary: DayBoundary) -> NaiveDate {
    match boundary {
        DayBoundary::Local => now.with_timezone(&Local).date_naive(),
        DayBoundary::Utc => now.date_naive(),
        DayBoundary::FixedOffset(secs) => match FixedOffset::east_opt(secs) {
            Some(offset) => now.with_timezone(&offset).date_naive(),
            None => now.date_naive(),
        },
    }
}

/// Whole minutes from `earlier` to `later`, floored.
pub fn floor_minutes(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_milliseconds().div_euclid(MS_PER_MINUTE)
}

/// Whole 24-hour periods from `earlier` to `later`, floored.
pub fn floor_days(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_milliseconds().div_euclid(MS_PER_DAY)
}
