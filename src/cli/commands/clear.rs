use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cfg: &Config, yes: bool) -> AppResult<()> {
    let mut session = open_session(cfg)?;

    let total = session.state().log.len();
    if total == 0 {
        info("History is already empty.");
        return Ok(());
    }

    let prompt = format!(
        "Delete all {} records? This action is irreversible.",
        total
    );
    if !confirm(&prompt, yes) {
        info("Operation cancelled.");
        return Ok(());
    }

    session.clear_log()?;
    success("History cleared.");
    Ok(())
}
