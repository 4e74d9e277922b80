//! Formatting utilities used for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render a dB value with the configured number of decimals.
/// Rounding happens only here; the calculator keeps full precision.
pub fn format_db(value: f64, decimals: u8) -> String {
    format!("{:.*}", decimals as usize, value)
}

/// Render fractional hours, e.g. 8.00 or 5.50.
pub fn format_hours(value: f64, decimals: u8) -> String {
    format!("{:.*}", decimals as usize, value)
}
