use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One recorded cigarette.
///
/// Stored inside the `event_log` record as
/// `{"id": 1718000000000, "timestamp": "2024-06-10T06:13:20Z", "gap_from_previous": 42}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    /// Whole minutes since the previous event; absent for the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_from_previous: Option<i64>,
}

impl Event {
    pub fn local_time_str(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%I:%M %p")
            .to_string()
    }

    pub fn local_date_time_str(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

/// How long the gap before an event was, relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapClass {
    Short,
    Medium,
    Long,
}

impl GapClass {
    pub fn classify(gap_minutes: i64, short_below: i64, long_above: i64) -> Self {
        if gap_minutes < short_below {
            GapClass::Short
        } else if gap_minutes > long_above {
            GapClass::Long
        } else {
            GapClass::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GapClass::Short => "short",
            GapClass::Medium => "medium",
            GapClass::Long => "long",
        }
    }
}

/// Append-only, chronologically ordered sequence of events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// The last `n` events, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Event> {
        self.events.iter().rev().take(n)
    }
}
