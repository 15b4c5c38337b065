use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ui_state::{IconPosition, parse_viewport};
use crate::ui::messages::{info, success};

/// Handle the `ui` subcommand: persisted placement of the floating icon.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ui {
        minimize,
        expand,
        position,
        viewport,
    } = cmd
    {
        let mut session = open_session(cfg)?;

        if *minimize {
            session.set_minimized(true)?;
            success("Minimized to the floating icon.");
        } else if *expand {
            session.set_minimized(false)?;
            success("Expanded to the full view.");
        }

        if let Some(raw) = position {
            let mut pos =
                IconPosition::parse(raw).ok_or_else(|| AppError::InvalidPosition(raw.clone()))?;

            if let Some(vp) = viewport {
                let (w, h) =
                    parse_viewport(vp).ok_or_else(|| AppError::InvalidViewport(vp.clone()))?;
                pos = pos.clamped(w, h);
            }

            session.set_icon_position(pos)?;
            success(format!("Icon moved to {},{}", pos.x, pos.y));
        }

        let ui = session.state().ui;
        info(format!(
            "View: {} | icon at {},{}",
            if ui.minimized { "minimized" } else { "full" },
            ui.icon_position.x,
            ui.icon_position.y
        ));
    }

    Ok(())
}
