//! Terminal width discovery.

use std::env;

/// Width used when neither the terminal nor `COLUMNS` reports one.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Returns the current output width in display columns.
///
/// Tries, in order: the size of the terminal attached to stdout, the
/// `COLUMNS` environment variable, and [`DEFAULT_TERMINAL_WIDTH`]. The result
/// is always positive.
pub fn terminal_width() -> usize {
    detected_width()
        .or_else(columns_from_env)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

fn detected_width() -> Option<usize> {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .filter(|&w| w > 0)
}

fn columns_from_env() -> Option<usize> {
    env::var("COLUMNS").ok().as_deref().and_then(parse_columns)
}

fn parse_columns(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|&w: &usize| w > 0)
}
