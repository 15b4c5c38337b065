//! Formatting utilities used for CLI output.

use crate::models::event::GapClass;
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};

/// Minutes as `45m`, `2h 5m` or `1d 3h 0m`.
pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let rem_minutes = minutes % 60;
    if hours >= 24 {
        let days = hours / 24;
        let rem_hours = hours % 24;
        return format!("{}d {}h {}m", days, rem_hours, rem_minutes);
    }
    format!("{}h {}m", hours, rem_minutes)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn colorize_gap(text: &str, class: GapClass) -> String {
    let color = match class {
        GapClass::Short => RED,
        GapClass::Medium => YELLOW,
        GapClass::Long => GREEN,
    };
    format!("{color}{text}{RESET}")
}
