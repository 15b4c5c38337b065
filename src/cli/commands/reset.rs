use crate::cli::commands::open_session;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cfg: &Config, yes: bool) -> AppResult<()> {
    let mut session = open_session(cfg)?;
    let now = SystemClock.now();

    let count = session.today_count(now);
    if count == 0 {
        info("Today's count is already zero.");
        return Ok(());
    }

    if !confirm(&format!("Reset today's count ({})?", count), yes) {
        info("Operation cancelled.");
        return Ok(());
    }

    session.reset_daily_counter(now)?;
    success("Today's count reset to 0. History is kept.");
    Ok(())
}
