/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholders ("--", "--:--"), leave anything else untouched.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Observed values in green, forecast values in cyan.
pub fn colorize_kind(value: &str, is_forecast: bool) -> String {
    if is_forecast {
        format!("{CYAN}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}
