use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of events recorded on a single calendar day.
///
/// `date` serializes as `YYYY-MM-DD` (chrono's default for `NaiveDate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounter {
    pub date: NaiveDate,
    pub count: u32,
}

impl DailyCounter {
    pub fn zero(date: NaiveDate) -> Self {
        Self { date, count: 0 }
    }

    pub fn is_for(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}
