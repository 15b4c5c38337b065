//! The controller: owns the tracker state and the store, and writes every
//! changed record back as soon as an operation mutates it.

use crate::config::Config;
use crate::core::clock::{DayBoundary, calendar_day};
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::store::{self, Loaded, RecordKey};
use crate::errors::{AppError, AppResult};
use crate::models::daily_counter::DailyCounter;
use crate::models::event::{Event, EventLog};
use crate::models::policy::QuittingPolicy;
use crate::models::state::TrackerState;
use crate::models::ui_state::{IconPosition, UiState};
use crate::ui::messages::warning;
use crate::utils::formatting::format_duration;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use serde::de::DeserializeOwned;

/// What a single clock tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub rolled_over: bool,
    pub advanced: bool,
}

pub struct Session {
    pool: DbPool,
    boundary: DayBoundary,
    state: TrackerState,
}

impl Session {
    /// Load every record, falling back to defaults for anything missing or
    /// unreadable, then bring the counter and the policy up to `now`.
    pub fn open(pool: DbPool, cfg: &Config, now: DateTime<Utc>) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;

        let boundary = cfg.day_boundary;
        let today = calendar_day(now, boundary);
        let conn = &pool.conn;

        let log = load_record(conn, RecordKey::EventLog, EventLog::default)?;
        let mut policy = load_record(conn, RecordKey::QuittingPolicy, || {
            QuittingPolicy::with_defaults(cfg.default_base_interval, cfg.default_growth_percent, now)
        })?;
        let policy_normalized = policy.normalize();
        let minimized = load_record(conn, RecordKey::UiMinimized, || false)?;
        let icon_position = load_record(conn, RecordKey::UiIconPosition, IconPosition::default)?;

        let (counter, counter_found) = match store::read::<DailyCounter>(conn, RecordKey::DailyCounter)? {
            Loaded::Found(c) => (c, true),
            other => {
                report_fallback(conn, RecordKey::DailyCounter, &other);
                (DailyCounter::zero(today), false)
            }
        };

        let mut session = Self {
            pool,
            boundary,
            state: TrackerState {
                log,
                counter,
                policy,
                ui: UiState {
                    minimized,
                    icon_position,
                },
            },
        };

        if !counter_found {
            session.save_counter()?;
        }
        if policy_normalized {
            session.audit(
                "load_fallback",
                RecordKey::QuittingPolicy.as_str(),
                "Out-of-range policy values clamped",
            );
            session.save_policy()?;
        }
        session.tick(now)?;
        Ok(session)
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn into_pool(self) -> DbPool {
        self.pool
    }

    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        calendar_day(now, self.boundary)
    }

    // ---------------------------
    // Clock-driven checks
    // ---------------------------

    /// Run both day-boundary checks. Only writes what actually changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> AppResult<TickOutcome> {
        Ok(TickOutcome {
            rolled_over: self.check_day_rollover(now)?,
            advanced: self.advance_if_day_changed(now)?,
        })
    }

    pub fn check_day_rollover(&mut self, now: DateTime<Utc>) -> AppResult<bool> {
        let today = self.today(now);
        if !self.state.counter.roll_over(today) {
            return Ok(false);
        }
        self.save_counter()?;
        self.audit("rollover", &today.to_string(), "Daily counter started a new day");
        Ok(true)
    }

    pub fn advance_if_day_changed(&mut self, now: DateTime<Utc>) -> AppResult<bool> {
        if !self.state.policy.advance_if_day_changed(now) {
            return Ok(false);
        }
        self.save_policy()?;
        let p = &self.state.policy;
        self.audit(
            "advance",
            &format!("day {}", p.display_day()),
            &format!("Required wait is now {} min", p.current_interval_minutes),
        );
        Ok(true)
    }

    // ---------------------------
    // Event log & daily counter
    // ---------------------------

    /// Record an event unconditionally.
    pub fn record_event(&mut self, now: DateTime<Utc>) -> AppResult<Event> {
        let today = self.today(now);
        let event = self.state.log.record(now);
        self.state.counter.increment(today);

        self.save_log()?;
        self.save_counter()?;

        let gap = event
            .gap_from_previous
            .map(|g| format!("gap {} min", g))
            .unwrap_or_else(|| "first record".to_string());
        self.audit("light", &event.id.to_string(), &gap);
        Ok(event)
    }

    /// Record an event only if quitting mode allows it right now.
    pub fn try_record_event(&mut self, now: DateTime<Utc>) -> AppResult<Event> {
        if !self.is_event_allowed_now(now) {
            let left = self.time_until_next_allowed(now).unwrap_or(0);
            return Err(AppError::NotAllowedYet(format_duration(left)));
        }
        self.record_event(now)
    }

    pub fn clear_log(&mut self) -> AppResult<()> {
        let removed = self.state.log.len();
        self.state.log.clear();
        self.save_log()?;
        self.audit("clear", "", &format!("Removed {} records", removed));
        Ok(())
    }

    pub fn reset_daily_counter(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        let today = self.today(now);
        self.state.counter.reset(today);
        self.save_counter()?;
        self.audit("reset", &today.to_string(), "Daily counter reset to zero");
        Ok(())
    }

    pub fn time_since_last_event(&self, now: DateTime<Utc>) -> Option<i64> {
        self.state.log.time_since_last(now)
    }

    pub fn today_count(&self, now: DateTime<Utc>) -> u32 {
        self.state.counter.count_for(self.today(now))
    }

    // ---------------------------
    // Quitting policy
    // ---------------------------

    pub fn activate_quitting(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        self.state.policy.activate(now);
        self.save_policy()?;
        let base = self.state.policy.base_interval_minutes;
        self.audit("quit_on", "", &format!("Quitting mode on, wait {} min", base));
        Ok(())
    }

    pub fn deactivate_quitting(&mut self) -> AppResult<()> {
        self.state.policy.deactivate();
        self.save_policy()?;
        self.audit("quit_off", "", "Quitting mode off");
        Ok(())
    }

    pub fn toggle_quitting(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        if self.state.policy.enabled {
            self.deactivate_quitting()
        } else {
            self.activate_quitting(now)
        }
    }

    pub fn set_base_interval(&mut self, minutes: i64) -> AppResult<()> {
        self.state.policy.set_base_interval(minutes);
        self.save_policy()?;
        let p = &self.state.policy;
        self.audit(
            "edit",
            "base_interval",
            &format!("{} min (current {} min)", p.base_interval_minutes, p.current_interval_minutes),
        );
        Ok(())
    }

    pub fn set_growth_percent(&mut self, percent: i64) -> AppResult<()> {
        self.state.policy.set_growth_percent(percent);
        self.save_policy()?;
        let growth = self.state.policy.growth_percent;
        self.audit("edit", "growth_percent", &format!("{}%", growth));
        Ok(())
    }

    pub fn is_event_allowed_now(&self, now: DateTime<Utc>) -> bool {
        self.state.policy.is_event_allowed_now(now, &self.state.log)
    }

    pub fn time_until_next_allowed(&self, now: DateTime<Utc>) -> Option<i64> {
        self.state.policy.time_until_next_allowed(now, &self.state.log)
    }

    // ---------------------------
    // UI placement
    // ---------------------------

    pub fn set_minimized(&mut self, minimized: bool) -> AppResult<()> {
        self.state.ui.minimized = minimized;
        store::write(&self.pool.conn, RecordKey::UiMinimized, &minimized)
    }

    pub fn set_icon_position(&mut self, position: IconPosition) -> AppResult<()> {
        self.state.ui.icon_position = position;
        store::write(&self.pool.conn, RecordKey::UiIconPosition, &position)
    }

    // ---------------------------
    // Persistence helpers
    // ---------------------------

    fn save_log(&self) -> AppResult<()> {
        store::write(&self.pool.conn, RecordKey::EventLog, &self.state.log)
    }

    fn save_counter(&self) -> AppResult<()> {
        store::write(&self.pool.conn, RecordKey::DailyCounter, &self.state.counter)
    }

    fn save_policy(&self) -> AppResult<()> {
        store::write(&self.pool.conn, RecordKey::QuittingPolicy, &self.state.policy)
    }

    /// Internal log line; failures are reported but never block the operation.
    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

fn load_record<T: DeserializeOwned>(
    conn: &Connection,
    key: RecordKey,
    default: impl FnOnce() -> T,
) -> AppResult<T> {
    let loaded = store::read::<T>(conn, key)?;
    report_fallback(conn, key, &loaded);
    Ok(loaded.unwrap_or_else(default))
}

/// Corrupt records are noted in the internal log; missing ones are just first run.
fn report_fallback<T>(conn: &Connection, key: RecordKey, loaded: &Loaded<T>) {
    if let Loaded::Corrupt(reason) = loaded {
        let _ = ttlog(
            conn,
            "load_fallback",
            key.as_str(),
            &format!("Unreadable record replaced by default: {}", reason),
        );
    }
}
