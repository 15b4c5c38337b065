/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Green when lighting is allowed, red while waiting.
pub fn color_for_allowed(allowed: bool) -> &'static str {
    if allowed { GREEN } else { RED }
}

/// GREY for absent values, RESET otherwise.
pub fn color_for_optional<T>(value: Option<T>) -> &'static str {
    match value {
        Some(_) => RESET,
        None => GREY,
    }
}
