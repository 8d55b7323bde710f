//! Formatting utilities used for CLI and export outputs.

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// `8.5` → `8.5h`, missing → `--`.
pub fn hours_or_dash(h: Option<f64>) -> String {
    h.map(|v| format!("{v:.1}h")).unwrap_or_else(|| "--".to_string())
}

/// `45` → `45 min`, missing → `--`.
pub fn minutes_or_dash(m: Option<i64>) -> String {
    m.map(|v| format!("{v} min")).unwrap_or_else(|| "--".to_string())
}

/// Minutes-from-midnight → `HH:MM`, missing → `--:--`.
pub fn clock_or_dash(m: Option<i64>) -> String {
    m.map(|v| mins2readable(v.rem_euclid(24 * 60), false, true))
        .unwrap_or_else(|| "--:--".to_string())
}
