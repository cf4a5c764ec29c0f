//! # TableGrid
//!
//! Multi-column tabular layout with no outer border:
//!
//! ```text
//!  ID │ Name         │ State
//! ────┼──────────────┼──────────
//!  1  │ alpha        │ [x] ready
//!  2  │ beta         │ [ ] idle
//! ```
//!
//! ## Width Fitting
//!
//! Columns render at their requested widths. Whatever is left over (or
//! missing) against the target width goes to the **last** column, which
//! never drops below one column. Every line, header, rule and data alike,
//! comes out exactly `width` columns wide: short lines are padded, long ones
//! truncated.
//!
//! ## Highlighting
//!
//! - `active_row`: one data row drawn in the active style, separators
//!   included.
//! - `highlight_markers`: `[x]`/`[X]` inside data cells drawn in the marker
//!   style, layered over whatever style the cell has.

use log::trace;
use ratatui::style::Style;

use crate::tui::component::Component;
use crate::tui::measure::{center, clamp_text_width, fit_width, pad_left, pad_right, visual_width};
use crate::tui::sanitize::sanitize_one_line;
use crate::tui::theme::{Theme, paint};

pub use ratatui::layout::Alignment;

const MARKERS: [&str; 2] = ["[x]", "[X]"];

/// Header, content width (separators excluded) and alignment of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
    pub align: Alignment,
}

impl TableColumn {
    /// A left-aligned column.
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Alignment::Left,
        }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Props for a grid render. Missing cells render empty; extra cells are
/// ignored.
#[derive(Debug, Clone)]
pub struct TableGrid<'a> {
    pub columns: &'a [TableColumn],
    pub rows: &'a [Vec<String>],
    pub width: usize,
    pub active_row: Option<usize>,
    pub highlight_markers: bool,
}

impl<'a> TableGrid<'a> {
    pub fn new(columns: &'a [TableColumn], rows: &'a [Vec<String>], width: usize) -> Self {
        Self {
            columns,
            rows,
            width,
            active_row: None,
            highlight_markers: false,
        }
    }

    pub fn active_row(mut self, row: Option<usize>) -> Self {
        self.active_row = row;
        self
    }

    pub fn highlight_markers(mut self, enabled: bool) -> Self {
        self.highlight_markers = enabled;
        self
    }
}

/// Column widths after the last column absorbs the difference.
pub fn fitted_widths(columns: &[TableColumn], separator_width: usize, width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.width.max(1)).collect();
    let expected: usize =
        widths.iter().sum::<usize>() + separator_width * widths.len().saturating_sub(1);

    if let Some(last) = widths.last_mut() {
        let adjusted = (*last + width).saturating_sub(expected);
        if adjusted == 0 {
            trace!("grid wants {expected} columns, only {width} available; last column pinned to 1");
        }
        *last = adjusted.max(1);
    }
    widths
}

/// Clamp and align `text` into exactly `width` columns.
fn align_cell(text: &str, width: usize, align: Alignment) -> String {
    let clamped = clamp_text_width(text, width);
    let aligned = match align {
        Alignment::Left => pad_right(&clamped, width),
        Alignment::Right => pad_left(&clamped, width),
        Alignment::Center => center(&clamped, width),
    };
    fit_width(&aligned, width)
}

/// Paint a cell, giving `[x]` markers their own style on top of the cell's.
fn paint_markers(text: &str, cell: Style, marker: Style) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(pos) = MARKERS.iter().filter_map(|m| rest.find(m)).min() {
        out.push_str(&paint(cell, &rest[..pos]));
        out.push_str(&paint(cell.patch(marker), &rest[pos..pos + 3]));
        rest = &rest[pos + 3..];
    }
    out.push_str(&paint(cell, rest));
    out
}

impl TableGrid<'_> {
    fn render_cells(
        &self,
        theme: &Theme,
        cells: &[String],
        widths: &[usize],
        cell_style: Style,
        separator_style: Style,
        markers: bool,
    ) -> String {
        let separator = paint(separator_style, theme.rules.vertical);
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (column, &width))| {
                let text = cells.get(i).map(|c| sanitize_one_line(c)).unwrap_or_default();
                let aligned = align_cell(&text, width, column.align);
                if markers {
                    paint_markers(&aligned, cell_style, theme.marker)
                } else {
                    paint(cell_style, &aligned)
                }
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

impl Component for TableGrid<'_> {
    fn render(&self, theme: &Theme) -> String {
        if self.width == 0 || self.columns.is_empty() {
            return String::new();
        }

        let widths = fitted_widths(self.columns, visual_width(theme.rules.vertical), self.width);
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        lines.push(self.render_cells(
            theme,
            &headers,
            &widths,
            theme.grid_header,
            theme.border,
            false,
        ));

        let rule = widths
            .iter()
            .map(|&w| theme.rules.horizontal.repeat(w))
            .collect::<Vec<_>>()
            .join(theme.rules.cross);
        lines.push(paint(theme.border, &rule));

        for (i, row) in self.rows.iter().enumerate() {
            let (cell_style, separator_style) = if self.active_row == Some(i) {
                (theme.active_row, theme.active_row)
            } else {
                (theme.value, theme.border)
            };
            lines.push(self.render_cells(
                theme,
                row,
                &widths,
                cell_style,
                separator_style,
                self.highlight_markers,
            ));
        }

        lines
            .iter()
            .map(|line| fit_width(line, self.width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{plain, plain_lines};
    use crate::tui::Renderer;
    use crate::tui::sanitize::strip_escapes;

    fn columns() -> Vec<TableColumn> {
        vec![
            TableColumn::new("ID", 3).align(Alignment::Right),
            TableColumn::new("Name", 8),
            TableColumn::new("State", 6).align(Alignment::Center),
        ]
    }

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".into(), "alpha".into(), "[x] ok".into()],
            vec!["22".into(), "a-very-long-name".into()],
        ]
    }

    #[test]
    fn last_column_absorbs_delta() {
        let cols = columns();
        // 3 + 8 + 6 + 2 separators = 19
        assert_eq!(fitted_widths(&cols, 1, 19), vec![3, 8, 6]);
        assert_eq!(fitted_widths(&cols, 1, 30), vec![3, 8, 17]);
        assert_eq!(fitted_widths(&cols, 1, 16), vec![3, 8, 3]);
        assert_eq!(fitted_widths(&cols, 1, 5), vec![3, 8, 1]);
    }

    #[test]
    fn layout_with_alignment() {
        let cols = columns();
        let rows = rows();
        let out = plain(&Renderer::default().render(&TableGrid::new(&cols, &rows, 19)));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " ID│Name    │State ");
        assert_eq!(lines[1], "───┼────────┼──────");
        assert_eq!(lines[2], "  1│alpha   │[x] ok");
        assert_eq!(lines[3], " 22│a-very-l│      ");
    }

    #[test]
    fn center_puts_extra_space_right() {
        assert_eq!(align_cell("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(align_cell("ab", 5, Alignment::Right), "   ab");
        assert_eq!(align_cell("abcdef", 3, Alignment::Right), "abc");
    }

    #[test]
    fn every_line_is_exact_width() {
        let cols = columns();
        let rows = vec![
            vec!["日本語".into(), "\x1b[31mred\x1b[0m".into(), "[X]".into()],
            vec!["x\ny".into(), "🔥🔥🔥🔥🔥".into(), "tail".into(), "extra".into()],
            vec![],
        ];
        let r = Renderer::default();
        for width in 1..60 {
            let grid = TableGrid::new(&cols, &rows, width)
                .active_row(Some(1))
                .highlight_markers(true);
            for line in plain_lines(&r.render(&grid)) {
                assert_eq!(visual_width(&line), width, "{width}: {line:?}");
            }
        }
    }

    #[test]
    fn degenerate_inputs_render_nothing() {
        let cols = columns();
        let r = Renderer::default();
        assert_eq!(r.render(&TableGrid::new(&cols, &[], 0)), "");
        assert_eq!(r.render(&TableGrid::new(&[], &rows(), 40)), "");
    }

    #[test]
    fn header_only_grid_has_header_and_rule() {
        let cols = columns();
        let out = Renderer::default().render(&TableGrid::new(&cols, &[], 25));
        assert_eq!(plain_lines(&out).len(), 2);
    }

    #[test]
    fn active_row_is_styled_only_there() {
        let cols = columns();
        let rows = rows();
        // Modifiers only, so the check holds even when NO_COLOR is set.
        let theme = Theme::monochrome();
        let plain_grid = TableGrid::new(&cols, &rows, 19).render(&theme);
        let active = TableGrid::new(&cols, &rows, 19)
            .active_row(Some(0))
            .render(&theme);

        let before: Vec<&str> = plain_grid.lines().collect();
        let after: Vec<&str> = active.lines().collect();
        assert_eq!(before[0], after[0]);
        assert_eq!(before[1], after[1]);
        assert_ne!(before[2], after[2]);
        assert_eq!(before[3], after[3]);
        assert_eq!(strip_escapes(before[2]), strip_escapes(after[2]));
    }

    #[test]
    fn markers_are_recolored_in_data_cells_only() {
        let cols = vec![TableColumn::new("[x] all", 10)];
        let rows = vec![vec!["[x] done".to_string()], vec!["[ ] todo".to_string()]];
        let theme = Theme::monochrome();
        let grid = TableGrid::new(&cols, &rows, 10).highlight_markers(true);
        let out = grid.render(&theme);
        let lines: Vec<&str> = out.lines().collect();

        let marked = paint(theme.value.patch(theme.marker), "[x]");
        assert!(!lines[0].contains(&marked));
        assert!(lines[2].contains(&marked));
        assert!(!lines[3].contains(&marked));
    }

    #[test]
    fn paint_markers_handles_both_cases() {
        let plain_style = Style::new();
        assert_eq!(paint_markers("[X] a [x]", plain_style, plain_style), "[X] a [x]");
    }
}
