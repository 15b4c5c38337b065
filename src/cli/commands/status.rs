use crate::cli::commands::open_session;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_allowed, color_for_optional};
use crate::utils::formatting::{format_duration, pad_right};
use chrono::{DateTime, Utc};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    print_status(&session, SystemClock.now());
    Ok(())
}

fn row(label: &str, value: &str) {
    println!("{}{}{} {}", CYAN, pad_right(label, 24), RESET, value);
}

pub(crate) fn print_status(session: &Session, now: DateTime<Utc>) {
    let state = session.state();
    let today = session.today(now);

    header(format!("rSmokelog - {}", today.format("%A, %b %-d")));

    row("Today:", &format!("{} cigarettes", session.today_count(now)));
    row("Total records:", &state.log.len().to_string());

    let since = session.time_since_last_event(now);
    row(
        "Time since last:",
        &format!(
            "{}{}{}",
            color_for_optional(since),
            since.map(format_duration).unwrap_or_else(|| "--".into()),
            RESET
        ),
    );

    let policy = &state.policy;
    if policy.enabled {
        row("Quitting mode:", "ON");
        row("Day:", &policy.display_day().to_string());
        row(
            "Required wait:",
            &format_duration(policy.current_interval_minutes),
        );
        if let Some(left) = session.time_until_next_allowed(now).filter(|m| *m > 0) {
            row("Time until next allowed:", &format_duration(left));
        }
    } else {
        row("Quitting mode:", &format!("{}OFF{}", GREY, RESET));
    }
    row(
        "Settings:",
        &format!(
            "start at {}, +{}% per day",
            format_duration(policy.base_interval_minutes),
            policy.growth_percent
        ),
    );

    let allowed = session.is_event_allowed_now(now);
    let verdict = if allowed { "Light one" } else { "Wait longer" };
    println!("\n{}{}{}", color_for_allowed(allowed), verdict, RESET);
}

/// Compact status used by `watch`.
pub(crate) fn one_line(session: &Session, now: DateTime<Utc>) -> String {
    let since = session
        .time_since_last_event(now)
        .map(format_duration)
        .unwrap_or_else(|| "--".into());

    let mut line = format!(
        "{} | today {} | since last {}",
        now.with_timezone(&chrono::Local).format("%H:%M:%S"),
        session.today_count(now),
        since
    );

    let policy = &session.state().policy;
    if policy.enabled {
        line.push_str(&format!(
            " | day {} wait {}",
            policy.display_day(),
            format_duration(policy.current_interval_minutes)
        ));
        match session.time_until_next_allowed(now) {
            Some(left) if left > 0 => line.push_str(&format!(" | next in {}", format_duration(left))),
            _ => line.push_str(" | ready"),
        }
    }
    line
}
