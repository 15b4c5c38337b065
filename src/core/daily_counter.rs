//! Same-day aggregate count, reset at the calendar-day boundary.

use crate::models::daily_counter::DailyCounter;
use chrono::NaiveDate;

impl DailyCounter {
    /// Count one event on `today`, starting over if the counter is stale.
    pub fn increment(&mut self, today: NaiveDate) {
        if self.is_for(today) {
            self.count += 1;
        } else {
            *self = DailyCounter {
                date: today,
                count: 1,
            };
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = DailyCounter::zero(today);
    }

    /// Replace a stale counter with a zero one for `today`.
    /// Returns true when something changed.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.is_for(today) {
            return false;
        }
        *self = DailyCounter::zero(today);
        true
    }

    /// Count to show for `today`; a stale counter reads as zero.
    pub fn count_for(&self, today: NaiveDate) -> u32 {
        if self.is_for(today) { self.count } else { 0 }
    }
}
