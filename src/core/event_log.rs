//! Recording events and reading derived values off the log.

use crate::core::clock::floor_minutes;
use crate::models::event::{Event, EventLog};
use chrono::{DateTime, Utc};

impl EventLog {
    /// Append a new event at `now` and return it.
    ///
    /// The gap is measured against the last entry, whatever its timestamp;
    /// the log itself never reorders.
    pub fn record(&mut self, now: DateTime<Utc>) -> Event {
        let gap_from_previous = self.last().map(|prev| floor_minutes(prev.timestamp, now));

        let event = Event {
            id: self.next_id(now),
            timestamp: now,
            gap_from_previous,
        };
        self.events.push(event.clone());
        event
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Minutes since the most recent event, floored. `None` on an empty log.
    pub fn time_since_last(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last().map(|last| floor_minutes(last.timestamp, now))
    }

    /// Creation-time id in milliseconds, bumped when two events share a tick.
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        match self.events.iter().map(|e| e.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_first_event_has_no_gap() {
        let mut log = EventLog::default();
        let ev = log.record(t0());
        assert_eq!(ev.gap_from_previous, None);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_gaps_follow_previous_event() {
        let mut log = EventLog::default();
        let offsets = [0, 45, 46, 200];
        for secs in offsets.iter().map(|m| m * 60 + 30) {
            log.record(t0() + Duration::seconds(secs));
        }
        let gaps: Vec<_> = log.events.iter().map(|e| e.gap_from_previous).collect();
        assert_eq!(gaps, vec![None, Some(45), Some(1), Some(154)]);
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let mut log = EventLog::default();
        let a = log.record(t0());
        let b = log.record(t0());
        let c = log.record(t0());
        assert!(a.id < b.id && b.id < c.id);
        assert_eq!(b.gap_from_previous, Some(0));
    }

    #[test]
    fn test_time_since_last() {
        let mut log = EventLog::default();
        assert_eq!(log.time_since_last(t0()), None);

        log.record(t0());
        assert_eq!(log.time_since_last(t0() + Duration::seconds(59)), Some(0));
        assert_eq!(log.time_since_last(t0() + Duration::minutes(17)), Some(17));
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = EventLog::default();
        log.record(t0());
        log.record(t0() + Duration::minutes(5));
        log.clear();
        assert!(log.is_empty());

        let ev = log.record(t0() + Duration::minutes(10));
        assert_eq!(ev.gap_from_previous, None);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut log = EventLog::default();
        for m in 0..5 {
            log.record(t0() + Duration::minutes(m * 10));
        }
        let stamps: Vec<_> = log.recent(3).map(|e| e.timestamp).collect();
        assert_eq!(
            stamps,
            vec![
                t0() + Duration::minutes(40),
                t0() + Duration::minutes(30),
                t0() + Duration::minutes(20)
            ]
        );
    }
}
