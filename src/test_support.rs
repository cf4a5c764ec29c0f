//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::tui::sanitize::strip_escapes;

/// Rendered output with all styling removed.
pub fn plain(rendered: &str) -> String {
    strip_escapes(rendered).into_owned()
}

/// Unstyled lines of rendered output.
pub fn plain_lines(rendered: &str) -> Vec<String> {
    plain(rendered).split('\n').map(str::to_string).collect()
}
