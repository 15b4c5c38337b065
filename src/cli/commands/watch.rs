use crate::cli::commands::open_session;
use crate::cli::commands::status::one_line;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::thread;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Tick once per second: apply day changes, print the countdown.
pub fn handle(cfg: &Config, ticks: Option<u64>) -> AppResult<()> {
    let mut session = open_session(cfg)?;
    let clock = SystemClock;
    let mut done = 0u64;

    loop {
        let now = clock.now();
        let outcome = session.tick(now)?;

        if outcome.rolled_over {
            info(format!("New day: {}", session.today(now)));
        }
        if outcome.advanced {
            info(format!(
                "Quitting mode day {}: wait is now {} min",
                session.state().policy.display_day(),
                session.state().policy.current_interval_minutes
            ));
        }
        println!("{}", one_line(&session, now));

        done += 1;
        if ticks.is_some_and(|limit| done >= limit) {
            break;
        }
        thread::sleep(TICK);
    }

    Ok(())
}
