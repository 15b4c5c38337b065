use crate::cli::commands::open_session;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::format_duration;

/// Record a cigarette, unless quitting mode says to wait.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg)?;
    let now = SystemClock.now();

    let event = session.try_record_event(now)?;

    let gap = match event.gap_from_previous {
        Some(g) => format!("{} since the previous one", format_duration(g)),
        None => "first record".to_string(),
    };
    success(format!(
        "Recorded at {} ({}). Today: {}",
        event.local_time_str(),
        gap,
        session.today_count(now)
    ));

    Ok(())
}
