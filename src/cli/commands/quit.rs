use crate::cli::commands::open_session;
use crate::cli::commands::status::print_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_duration;

/// Handle the `quit` subcommand: switch and tune quitting mode.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quit {
        on,
        off,
        toggle,
        base,
        growth,
    } = cmd
    {
        let mut session = open_session(cfg)?;
        let now = SystemClock.now();

        // Settings first, so that `--on --base 45` starts at 45 minutes.
        if let Some(minutes) = base {
            session.set_base_interval(*minutes)?;
            success(format!(
                "Initial wait set to {}",
                format_duration(session.state().policy.base_interval_minutes)
            ));
        }
        if let Some(percent) = growth {
            session.set_growth_percent(*percent)?;
            success(format!(
                "Daily extension set to {}%",
                session.state().policy.growth_percent
            ));
        }

        let enabled = session.state().policy.enabled;
        let turn_on = (*on || *toggle) && !enabled;
        let turn_off = (*off || *toggle) && enabled;

        if turn_on {
            session.activate_quitting(now)?;
            success("Quitting mode ON");
        } else if turn_off {
            session.deactivate_quitting()?;
            success("Quitting mode OFF");
        } else if *on || *off {
            info(format!(
                "Quitting mode is already {}",
                if enabled { "ON" } else { "OFF" }
            ));
        }

        print_status(&session, now);
    }

    Ok(())
}
