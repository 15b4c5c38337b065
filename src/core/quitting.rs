//! Quitting-mode engine: escalating wait interval and event eligibility.

use crate::core::clock::floor_days;
use crate::models::event::EventLog;
use crate::models::policy::{
    MIN_BASE_INTERVAL, QuittingPolicy, clamp_base_interval, clamp_growth_percent,
};
use chrono::{DateTime, Utc};

/// `round(base * (1 + growth/100)^days)`, saturating at `i64::MAX`.
pub fn escalated_interval(base_minutes: i64, growth_percent: i64, days: i64) -> i64 {
    let factor = 1.0 + growth_percent as f64 / 100.0;
    let exp = days.clamp(0, i32::MAX as i64) as i32;
    (base_minutes as f64 * factor.powi(exp)).round() as i64
}

impl QuittingPolicy {
    /// Start a fresh escalation window at `now`.
    pub fn activate(&mut self, now: DateTime<Utc>) {
        self.enabled = true;
        self.activation_date = now;
        self.days_active = 0;
        self.current_interval_minutes = self.base_interval_minutes;
    }

    /// Stop enforcing; the other fields stay as they are.
    pub fn deactivate(&mut self) {
        self.enabled = false;
    }

    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.enabled {
            self.deactivate();
        } else {
            self.activate(now);
        }
    }

    /// Recompute the required wait once a new whole day has elapsed since
    /// activation. Advance-only: a smaller elapsed value never rewinds it.
    pub fn advance_if_day_changed(&mut self, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return false;
        }

        let elapsed = floor_days(self.activation_date, now);
        if elapsed <= self.days_active {
            return false;
        }

        self.days_active = elapsed;
        self.current_interval_minutes =
            escalated_interval(self.base_interval_minutes, self.growth_percent, elapsed);
        true
    }

    /// Clamp to 1..=1440 minutes. On day 0 of an active window the required
    /// wait follows the base directly, since no growth has been applied yet.
    pub fn set_base_interval(&mut self, minutes: i64) {
        let clamped = clamp_base_interval(minutes);
        self.base_interval_minutes = clamped;
        if self.enabled && self.days_active == 0 {
            self.current_interval_minutes = clamped;
        }
    }

    /// Clamp to 1..=100 percent. Applied at the next day advance.
    pub fn set_growth_percent(&mut self, percent: i64) {
        self.growth_percent = clamp_growth_percent(percent);
    }

    pub fn is_event_allowed_now(&self, now: DateTime<Utc>, log: &EventLog) -> bool {
        if !self.enabled {
            return true;
        }
        match log.time_since_last(now) {
            None => true,
            Some(since) => since >= self.current_interval_minutes,
        }
    }

    /// Minutes left before the next event is allowed.
    /// `None` when quitting mode is off or nothing has been recorded yet.
    pub fn time_until_next_allowed(&self, now: DateTime<Utc>, log: &EventLog) -> Option<i64> {
        if !self.enabled {
            return None;
        }
        let since = log.time_since_last(now)?;
        Some(self.current_interval_minutes.saturating_sub(since).max(0))
    }

    /// Pull persisted values back into their valid ranges. A non-positive
    /// wait is recomputed from the settings. Returns whether anything changed.
    pub fn normalize(&mut self) -> bool {
        let before = self.clone();

        self.base_interval_minutes = clamp_base_interval(self.base_interval_minutes);
        self.growth_percent = clamp_growth_percent(self.growth_percent);
        self.days_active = self.days_active.max(0);
        if self.current_interval_minutes < MIN_BASE_INTERVAL {
            self.current_interval_minutes = if self.enabled {
                escalated_interval(self.base_interval_minutes, self.growth_percent, self.days_active)
            } else {
                self.base_interval_minutes
            };
        }

        *self != before
    }
}
