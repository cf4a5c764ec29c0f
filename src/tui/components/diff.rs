//! # Diff Table
//!
//! Field-level before/after rows:
//!
//! ```text
//! status
//!   - active
//!   + archived
//!
//! description
//!   - -
//!   + first line
//!     second line
//! ```
//!
//! Empty sides show a `-` placeholder. Long lines are soft-wrapped under
//! their prefix so nothing disappears off the right edge of the box.

use crate::tui::Renderer;
use crate::tui::sanitize::{sanitize_one_line, sanitize_text};
use crate::tui::theme::paint;
use crate::tui::width::box_content_width;

const FROM_PREFIX: &str = "  - ";
const TO_PREFIX: &str = "  + ";
const CONTINUATION: &str = "    ";
const PLACEHOLDER: &str = "-";

/// One field's old and new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffRow {
    pub label: String,
    pub from: String,
    pub to: String,
}

impl DiffRow {
    pub fn new(label: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Break on ASCII spaces; split words that are longer than a line.
fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Prefixed lines for one side of a diff.
fn side_lines(prefix: &str, value: &str, content_width: usize) -> Vec<String> {
    let value = sanitize_text(value).replace('\t', "    ");
    let text_width = content_width.saturating_sub(prefix.len());

    let mut lines: Vec<String> = Vec::new();
    if value.trim().is_empty() {
        lines.push(PLACEHOLDER.to_string());
    } else if text_width == 0 {
        lines.extend(value.lines().map(str::to_string));
    } else {
        for line in value.lines() {
            lines.extend(
                textwrap::wrap(line, wrap_options(text_width))
                    .into_iter()
                    .map(|l| l.into_owned()),
            );
        }
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { prefix } else { CONTINUATION };
            format!("{lead}{line}")
        })
        .collect()
}

impl Renderer {
    /// Diff rows in a titled box. No rows, no output.
    pub fn diff_table(&self, title: &str, rows: &[DiffRow], width: usize) -> String {
        if rows.is_empty() {
            return String::new();
        }
        self.titled_box(title, &self.diff_body(rows, width), width)
    }

    /// Diff rows without a frame, separated by blank lines.
    pub fn diff_body(&self, rows: &[DiffRow], width: usize) -> String {
        let content_width = box_content_width(width);
        rows.iter()
            .map(|row| {
                let mut lines = vec![paint(self.theme.label, &sanitize_one_line(&row.label))];
                lines.extend(
                    side_lines(FROM_PREFIX, &row.from, content_width)
                        .iter()
                        .map(|l| paint(self.theme.diff_from, l)),
                );
                lines.extend(
                    side_lines(TO_PREFIX, &row.to, content_width)
                        .iter()
                        .map(|l| paint(self.theme.diff_to, l)),
                );
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
