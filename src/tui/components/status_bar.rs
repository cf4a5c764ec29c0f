//! # Status Bar
//!
//! Key hints laid out under the main view:
//!
//! ```text
//!       [ ↑↓ move ] [ enter open ] [ q quit ]
//! ```
//!
//! Segments are packed greedily into rows no wider than the target width.
//! Each row is centered against the widest row, and the block is centered
//! under the target width. A segment too wide for any row gets a row to
//! itself and is clipped.

use crate::tui::Renderer;
use crate::tui::measure::{center, fit_width, visual_width};
use crate::tui::sanitize::sanitize_one_line;
use crate::tui::theme::paint;

const SEGMENT_OPEN: &str = "[ ";
const SEGMENT_CLOSE: &str = " ]";
const GAP: &str = " ";

impl Renderer {
    /// One key/description capsule, e.g. `q quit`.
    pub fn hint(&self, key: &str, desc: &str) -> String {
        format!(
            "{} {}",
            paint(self.theme.hint_key, &sanitize_one_line(key)),
            paint(self.theme.hint_desc, &sanitize_one_line(desc)),
        )
    }

    /// Lay out pre-rendered hints, wrapping onto centered rows.
    ///
    /// With a width of 0 everything goes on one line, unwrapped.
    pub fn status_bar(&self, hints: &[String], width: usize) -> String {
        if hints.is_empty() {
            return String::new();
        }

        let segments: Vec<String> = hints
            .iter()
            .map(|hint| {
                format!(
                    "{}{hint}{}",
                    paint(self.theme.border, SEGMENT_OPEN),
                    paint(self.theme.border, SEGMENT_CLOSE)
                )
            })
            .collect();

        if width == 0 {
            return segments.join(GAP);
        }

        let lines: Vec<String> = pack_rows(&segments, width)
            .iter()
            .map(|row| row.join(GAP))
            .collect();
        let widest = lines.iter().map(|l| visual_width(l)).max().unwrap_or(0);

        lines
            .iter()
            .map(|line| fit_width(&center(&center(line, widest), width), width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Greedy row packing. A segment opens a new row when it would push a
/// non-empty row past `width`.
fn pack_rows(segments: &[String], width: usize) -> Vec<Vec<&str>> {
    let mut rows = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0;

    for segment in segments {
        let w = visual_width(segment);
        if !current.is_empty() && current_width + GAP.len() + w > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current_width += if current.is_empty() { w } else { GAP.len() + w };
        current.push(segment);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{plain, plain_lines};

    fn hints(r: &Renderer) -> Vec<String> {
        vec![r.hint("↑↓", "move"), r.hint("enter", "open"), r.hint("q", "quit")]
    }

    #[test]
    fn hint_is_key_then_description() {
        let r = Renderer::default();
        assert_eq!(plain(&r.hint("q", "quit")), "q quit");
        assert_eq!(plain(&r.hint("q\x1b[2J", "qu\nit")), "q qu it");
    }

    #[test]
    fn zero_width_is_one_unwrapped_line() {
        let r = Renderer::default();
        let out = plain(&r.status_bar(&hints(&r), 0));
        assert_eq!(out, "[ ↑↓ move ] [ enter open ] [ q quit ]");
    }

    #[test]
    fn fits_on_one_centered_line() {
        let r = Renderer::default();
        let out = plain(&r.status_bar(&hints(&r), 50));
        // 37 columns of segments, 13 free -> 6 left, 7 right
        assert_eq!(out, format!("      [ ↑↓ move ] [ enter open ] [ q quit ]{}", " ".repeat(7)));
    }

    #[test]
    fn wraps_and_centers_rows() {
        let r = Renderer::default();
        let out = r.status_bar(&hints(&r), 26);
        let lines = plain_lines(&out);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim(), "[ ↑↓ move ] [ enter open ]");
        assert_eq!(lines[1].trim(), "[ q quit ]");
        for line in &lines {
            assert_eq!(visual_width(line), 26);
        }
    }

    #[test]
    fn over_wide_segments_get_own_rows() {
        let r = Renderer::default();
        let wide: Vec<String> = (0..3)
            .map(|i| r.hint(&format!("key{i}"), "a very long description"))
            .collect();
        let out = r.status_bar(&wide, 12);
        let lines = plain_lines(&out);
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            assert!(visual_width(line) <= 12);
            assert!(line.starts_with(&format!("[ key{i}")));
        }
    }

    #[test]
    fn no_hints_no_output() {
        assert_eq!(Renderer::default().status_bar(&[], 80), "");
    }

    #[test]
    fn packing_is_greedy() {
        let segs: Vec<String> = ["aaaa", "bb", "cccccc", "d"].iter().map(|s| s.to_string()).collect();
        let rows = pack_rows(&segs, 7);
        assert_eq!(rows, vec![vec!["aaaa", "bb"], vec!["cccccc"], vec!["d"]]);
    }
}
