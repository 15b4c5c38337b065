use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogEntry, load_log};
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "light" => Colour::Green,
        "clear" | "reset" => Colour::Red,
        "edit" => Colour::Yellow,
        "quit_on" | "quit_off" => Colour::Cyan,
        "rollover" | "advance" => Colour::Blue,
        "load_fallback" => Colour::RGB(255, 153, 51),
        "migration_applied" | "init" => Colour::Purple,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        run_pending_migrations(&pool.conn)?;
        print_log(&load_log(&pool.conn)?)?;
    }

    Ok(())
}

fn print_log(entries: &[LogEntry]) -> AppResult<()> {
    if entries.is_empty() {
        info("Internal log is empty.");
        return Ok(());
    }

    let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")?;

    let rows: Vec<(String, &LogEntry)> = entries
        .iter()
        .map(|e| {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());
            (date, e)
        })
        .collect();

    let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
    let date_w = rows.iter().map(|(d, _)| d.len()).max().unwrap_or(10);
    let op_w = entries
        .iter()
        .map(|e| e.operation.len() + e.target.len() + 3)
        .max()
        .unwrap_or(10)
        .min(MAX_OP_WIDTH);

    println!("📜 Internal log:\n");

    for (date, e) in rows {
        let color = color_for_operation(&e.operation);

        let mut op_target = color.paint(e.operation.as_str()).to_string();
        if !e.target.is_empty() {
            op_target.push_str(&format!(" ({})", e.target));
        }

        // truncate on the visible text, then re-colour the operation word
        let visible = strip_ansi(&ansi, &op_target);
        let shown = if visible.chars().count() > MAX_OP_WIDTH {
            let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
            s.push_str("...");
            match s.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(s.as_str()).to_string(),
            }
        } else {
            op_target
        };

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &shown).chars().count()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            date,
            shown,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
