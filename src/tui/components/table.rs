//! # Table
//!
//! Label/value rows aligned into two columns inside a box:
//!
//! ```text
//! ╭─ [ Agent ] ─────────────────────╮
//! │  Name      alpha-7              │
//! │  Status    running              │
//! ╰─────────────────────────────────╯
//! ```
//!
//! ## Column Fitting
//!
//! The label column is as wide as the widest label, but never more than
//! [`MAX_LABEL_WIDTH`] and never more than half the content width (unless
//! half would be under 8 columns). Values get what's left after a two-space
//! gutter, with a floor of [`MIN_VALUE_WIDTH`]; when the floor kicks in the
//! label column gives way.

use crate::tui::Renderer;
use crate::tui::measure::{clamp_text_width, pad_right, visual_width};
use crate::tui::sanitize::sanitize_one_line;
use crate::tui::theme::paint;
use crate::tui::width::box_content_width;

pub const MAX_LABEL_WIDTH: usize = 24;
pub const MIN_VALUE_WIDTH: usize = 4;
/// Space between label and value columns.
pub const GUTTER: &str = "  ";
/// Below this, half the content width is too narrow to cap the label column.
const MIN_HALF_WIDTH: usize = 8;
/// Value room assumed when there is no width to fit into.
const UNCONSTRAINED_VALUE_ROOM: usize = 8;

/// A single label/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

impl TableRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Label and value column widths for a given content width.
pub fn column_widths(max_label: usize, content_width: usize) -> (usize, usize) {
    let half = content_width / 2;
    let cap = if half >= MIN_HALF_WIDTH {
        half
    } else {
        content_width
    };

    let mut label_width = max_label.min(MAX_LABEL_WIDTH).min(cap);
    let mut value_width = content_width.saturating_sub(label_width + GUTTER.len());
    if value_width < MIN_VALUE_WIDTH {
        value_width = MIN_VALUE_WIDTH;
        label_width = content_width.saturating_sub(MIN_VALUE_WIDTH + GUTTER.len());
    }
    (label_width, value_width)
}

impl Renderer {
    /// Rows in a box, titled when `title` is non-empty. No rows, no output.
    pub fn table(&self, title: &str, rows: &[TableRow], width: usize) -> String {
        if rows.is_empty() {
            return String::new();
        }
        self.titled_box(title, &self.table_body(rows, width), width)
    }

    /// The aligned rows without a frame, one per line.
    pub fn table_body(&self, rows: &[TableRow], width: usize) -> String {
        let rows: Vec<(String, String)> = rows
            .iter()
            .map(|row| (sanitize_one_line(&row.label), sanitize_one_line(&row.value)))
            .collect();

        let max_label = rows
            .iter()
            .map(|(label, _)| visual_width(label))
            .max()
            .unwrap_or(0);
        let content_width = match box_content_width(width) {
            0 => max_label + UNCONSTRAINED_VALUE_ROOM,
            w => w,
        };
        let (label_width, value_width) = column_widths(max_label, content_width);

        rows.iter()
            .map(|(label, value)| {
                format!(
                    "{}{GUTTER}{}",
                    paint(
                        self.theme.label,
                        &pad_right(&clamp_text_width(label, label_width), label_width)
                    ),
                    paint(self.theme.value, &clamp_text_width(value, value_width)),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
