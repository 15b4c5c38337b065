use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::GapClass;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{colorize_gap, format_duration};

pub fn handle(cfg: &Config, limit: Option<usize>) -> AppResult<()> {
    let session = open_session(cfg)?;
    let log = &session.state().log;

    if log.is_empty() {
        info("No records yet. Run `rsmokelog light` when you have your first cigarette.");
        return Ok(());
    }

    let limit = limit.unwrap_or(cfg.history_limit);
    println!("📜 Recent history ({} of {}):\n", limit.min(log.len()), log.len());

    for ev in log.recent(limit) {
        let gap = match ev.gap_from_previous {
            Some(g) => {
                let class = GapClass::classify(g, cfg.gap_short_minutes, cfg.gap_long_minutes);
                format!(
                    "{} ({})",
                    colorize_gap(&format!("{} gap", format_duration(g)), class),
                    class.as_str()
                )
            }
            None => format!("{}first record{}", GREY, RESET),
        };
        println!("{}  {}", ev.local_date_time_str(), gap);
    }

    Ok(())
}
