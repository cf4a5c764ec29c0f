//! # Frames
//!
//! Rounded boxes with fixed padding, in four flavors:
//!
//! ```text
//! ╭──────────────╮   ╭─ [ Title ] ──╮
//! │  content     │   │  content     │
//! ╰──────────────╯   ╰──────────────╯
//! ```
//!
//! `boxed`, `active_box` and `error_box` differ only in palette (plus the
//! error title line). `titled_box` draws a plain box and then rewrites its
//! top border in place.
//!
//! Every line of a frame is exactly the frame width. Content is trusted to be
//! sanitized already (it usually carries our own styling); the error box is
//! the exception because it renders collaborator failures verbatim.

use log::trace;
use ratatui::style::Style;

use crate::tui::Renderer;
use crate::tui::measure::{clamp_text_width, fit_width, truncate_chars, visual_width};
use crate::tui::sanitize::{sanitize_one_line, sanitize_text};
use crate::tui::theme::{Theme, paint};
use crate::tui::width::{BORDER_WIDTH, HORIZONTAL_OVERHEAD, PADDING_H, safe_box_width};

/// Below this top-border width there is no room for a title.
const MIN_TITLED_WIDTH: usize = 4;
const TAB: &str = "    ";

impl Renderer {
    /// Content in a plain rounded box, `safe_box_width(width)` wide.
    ///
    /// A width of 0 means "unconstrained": the box takes the natural width
    /// of its widest line.
    pub fn boxed(&self, content: &str, width: usize) -> String {
        render_frame(&self.theme, self.theme.border, content, safe_box_width(width))
    }

    /// Same layout as [`boxed`](Self::boxed), highlighted border.
    pub fn active_box(&self, content: &str, width: usize) -> String {
        render_frame(
            &self.theme,
            self.theme.active_border,
            content,
            safe_box_width(width),
        )
    }

    /// Error palette, with an optional bold title line above the message.
    pub fn error_box(&self, title: &str, message: &str, width: usize) -> String {
        let title = sanitize_one_line(title);
        let message = sanitize_text(message);
        let content = if title.is_empty() {
            message
        } else {
            format!("{}\n{}", paint(self.theme.error_title, &title), message)
        };
        render_frame(
            &self.theme,
            self.theme.error_border,
            &content,
            safe_box_width(width),
        )
    }

    /// A plain box with `title` set into the top border.
    ///
    /// An empty title renders exactly like [`boxed`](Self::boxed).
    pub fn titled_box(&self, title: &str, content: &str, width: usize) -> String {
        let rendered = self.boxed(content, width);
        embed_title(&self.theme, self.theme.border, &rendered, title)
    }
}

/// Draw a frame exactly `frame_width` columns wide (0 = natural width).
pub(crate) fn render_frame(
    theme: &Theme,
    border: Style,
    content: &str,
    frame_width: usize,
) -> String {
    let lines: Vec<String> = content.split('\n').map(|l| l.replace('\t', TAB)).collect();

    let frame_width = if frame_width == 0 {
        lines.iter().map(|l| visual_width(l)).max().unwrap_or(0) + HORIZONTAL_OVERHEAD
    } else {
        frame_width
    };
    if frame_width < 2 * BORDER_WIDTH {
        return String::new();
    }

    let glyphs = theme.frame;
    let inner = frame_width - 2 * BORDER_WIDTH;
    let pad = PADDING_H.min(inner / 2);
    let text_width = inner - 2 * pad;
    let side = paint(border, glyphs.vertical);
    let padding = " ".repeat(pad);

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(paint(
        border,
        &format!(
            "{}{}{}",
            glyphs.top_left,
            glyphs.horizontal.repeat(inner),
            glyphs.top_right
        ),
    ));
    for line in &lines {
        out.push(format!(
            "{side}{padding}{}{padding}{side}",
            fit_width(line, text_width)
        ));
    }
    out.push(paint(
        border,
        &format!(
            "{}{}{}",
            glyphs.bottom_left,
            glyphs.horizontal.repeat(inner),
            glyphs.bottom_right
        ),
    ));
    out.join("\n")
}

/// Rewrite the top border of an already rendered frame to carry `title`.
pub(crate) fn embed_title(theme: &Theme, border: Style, rendered: &str, title: &str) -> String {
    let title = sanitize_one_line(title);
    if title.is_empty() {
        return rendered.to_string();
    }

    let (top, rest) = match rendered.split_once('\n') {
        Some((top, rest)) => (top, Some(rest)),
        None => (rendered, None),
    };
    let line_width = visual_width(top);
    if line_width < MIN_TITLED_WIDTH {
        trace!("title skipped: top border is only {line_width} columns");
        return rendered.to_string();
    }

    let run = line_width - 2;
    let label = truncate_chars(&format!(" [ {title} ] "), run);
    let free = run.saturating_sub(visual_width(&label));
    let left = free / 2;

    let glyphs = theme.frame;
    let compose = |right: usize| {
        format!(
            "{}{}{}",
            paint(
                border,
                &format!("{}{}", glyphs.top_left, glyphs.horizontal.repeat(left))
            ),
            paint(theme.title, &label),
            paint(
                border,
                &format!("{}{}", glyphs.horizontal.repeat(right), glyphs.top_right)
            ),
        )
    };

    let mut composed = compose(free - left);
    let composed_width = visual_width(&composed);
    if composed_width < line_width {
        composed = compose(free - left + line_width - composed_width);
    } else if composed_width > line_width {
        // Wide title glyphs: chars fit the run but columns don't.
        composed = fit_width(&clamp_text_width(&composed, line_width), line_width);
    }

    match rest {
        Some(rest) => format!("{composed}\n{rest}"),
        None => composed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{plain, plain_lines};

    fn renderer() -> Renderer {
        Renderer::new(Theme::default())
    }

    #[test]
    fn box_lines_match_safe_width() {
        for width in [10, 40, 60, 100, 200] {
            let out = renderer().boxed("hello\nworld", width);
            let lines = plain_lines(&out);
            assert_eq!(lines.len(), 4);
            for line in &lines {
                assert_eq!(visual_width(line), safe_box_width(width), "{width}: {line:?}");
            }
        }
    }

    #[test]
    fn box_layout() {
        let out = plain(&renderer().boxed("hi", 100));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("╭{}╮", "─".repeat(68)));
        assert_eq!(lines[1], format!("│  hi{}  │", " ".repeat(64 - 2)));
        assert_eq!(lines[2], format!("╰{}╯", "─".repeat(68)));
    }

    #[test]
    fn box_clamps_long_content() {
        let long = "x".repeat(500);
        let out = renderer().boxed(&long, 60);
        for line in plain_lines(&out) {
            assert_eq!(visual_width(&line), 42);
        }
    }

    #[test]
    fn box_expands_tabs() {
        let out = plain(&renderer().boxed("a\tb", 100));
        assert!(out.contains("a    b"));
    }

    #[test]
    fn zero_width_box_takes_natural_width() {
        let out = renderer().boxed("short\na longer line", 0);
        for line in plain_lines(&out) {
            assert_eq!(visual_width(&line), "a longer line".len() + 6);
        }
    }

    #[test]
    fn tiny_frames_stay_exact() {
        let theme = Theme::default();
        for width in 2..8 {
            let out = render_frame(&theme, theme.border, "content", width);
            for line in plain_lines(&out) {
                assert_eq!(visual_width(&line), width);
            }
        }
        assert_eq!(render_frame(&theme, theme.border, "x", 1), "");
    }

    #[test]
    fn active_and_error_share_layout() {
        let r = renderer();
        let plain_box = plain(&r.boxed("same", 80));
        assert_eq!(plain(&r.active_box("same", 80)), plain_box);
        assert_eq!(plain(&r.error_box("", "same", 80)), plain_box);
    }

    #[test]
    fn error_box_prefixes_title_and_sanitizes() {
        let out = plain(&renderer().error_box("Request failed", "status 500\x1b]0;pwn\x07", 80));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Request failed"));
        assert!(lines[2].contains("status 500"));
        assert!(!out.contains("pwn"));
    }

    #[test]
    fn empty_title_is_identity() {
        let r = renderer();
        for width in [0, 5, 40, 100] {
            assert_eq!(r.titled_box("", "body", width), r.boxed("body", width));
        }
        assert_eq!(r.titled_box("\n\t ", "body", 80), r.boxed("body", 80));
    }

    #[test]
    fn title_is_centered_in_top_border() {
        let out = plain(&renderer().titled_box("Hi", "body", 100));
        let top = out.lines().next().unwrap_or_default();
        // run = 68, label " [ Hi ] " = 8, free = 60 split 30/30
        assert_eq!(top, format!("╭{} [ Hi ] {}╮", "─".repeat(30), "─".repeat(30)));
    }

    #[test]
    fn odd_leftover_goes_right() {
        let out = plain(&renderer().titled_box("Odd", "body", 100));
        let top = out.lines().next().unwrap_or_default();
        // label " [ Odd ] " = 9, free = 59 -> 29 left, 30 right
        assert_eq!(top, format!("╭{} [ Odd ] {}╮", "─".repeat(29), "─".repeat(30)));
    }

    #[test]
    fn long_title_is_truncated_to_border() {
        let title = "t".repeat(200);
        for width in [4, 5, 6, 12, 40, 120] {
            let out = renderer().titled_box(&title, "body", width);
            for line in plain_lines(&out) {
                assert_eq!(visual_width(&line), safe_box_width(width), "{width}");
            }
            let top = plain_lines(&out).remove(0);
            assert!(top.starts_with('╭'));
            assert!(top.ends_with('╮'));
        }
    }

    #[test]
    fn narrow_border_skips_title() {
        let r = renderer();
        assert_eq!(r.titled_box("Title", "x", 3), r.boxed("x", 3));
    }

    #[test]
    fn wide_title_truncates_by_chars_not_columns() {
        // Chars fit the run, columns do not: the line is still exact but the
        // right corner is lost. Known gap of char-count truncation.
        let out = renderer().titled_box("日本語日本語日本語日本語日本語", "x", 20);
        let top = plain_lines(&out).remove(0);
        assert_eq!(visual_width(&top), 20);
        assert!(!top.ends_with('╮'));
    }

    #[test]
    fn title_is_sanitized() {
        let out = plain(&renderer().titled_box("\x1b[2Jevil\u{202E}name", "x", 80));
        assert!(out.contains("[ evilname ]"));
    }
}
