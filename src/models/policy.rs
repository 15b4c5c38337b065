use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_BASE_INTERVAL: i64 = 1;
pub const MAX_BASE_INTERVAL: i64 = 1440; // 24h
pub const MIN_GROWTH_PERCENT: i64 = 1;
pub const MAX_GROWTH_PERCENT: i64 = 100;

pub const DEFAULT_BASE_INTERVAL: i64 = 30;
pub const DEFAULT_GROWTH_PERCENT: i64 = 10;

/// Quitting mode: an escalating minimum wait between two cigarettes.
///
/// While enabled, `current_interval_minutes` follows
/// `round(base_interval_minutes * (1 + growth_percent / 100) ^ days_active)`,
/// except that edits to the base on day 0 are copied straight into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuittingPolicy {
    pub enabled: bool,
    pub growth_percent: i64,
    pub base_interval_minutes: i64,
    pub current_interval_minutes: i64,
    pub activation_date: DateTime<Utc>,
    pub days_active: i64,
}

impl QuittingPolicy {
    /// A disabled policy with the given (clamped) settings.
    pub fn with_defaults(base_interval: i64, growth_percent: i64, now: DateTime<Utc>) -> Self {
        let base = clamp_base_interval(base_interval);
        Self {
            enabled: false,
            growth_percent: clamp_growth_percent(growth_percent),
            base_interval_minutes: base,
            current_interval_minutes: base,
            activation_date: now,
            days_active: 0,
        }
    }

    /// Day number shown to the user (day 1 is the activation day).
    pub fn display_day(&self) -> i64 {
        self.days_active + 1
    }
}

pub fn clamp_base_interval(minutes: i64) -> i64 {
    minutes.clamp(MIN_BASE_INTERVAL, MAX_BASE_INTERVAL)
}

pub fn clamp_growth_percent(percent: i64) -> i64 {
    percent.clamp(MIN_GROWTH_PERCENT, MAX_GROWTH_PERCENT)
}
