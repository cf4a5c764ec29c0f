//! # Theme
//!
//! Styles and glyphs used by every renderer, held as one immutable value.
//! A [`Renderer`](super::Renderer) owns its theme, so two renderers with
//! different palettes can coexist (tests rely on this).
//!
//! Styles are plain ratatui [`Style`]s. [`paint`] turns a style plus text into
//! an ANSI string through crossterm, which is what ends up on the terminal.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::{border, line};

/// Glyphs for a bordered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl FrameGlyphs {
    /// `╭─╮ │ ╰─╯`
    pub fn rounded() -> Self {
        let set = border::ROUNDED;
        Self {
            top_left: set.top_left,
            top_right: set.top_right,
            bottom_left: set.bottom_left,
            bottom_right: set.bottom_right,
            horizontal: set.horizontal_top,
            vertical: set.vertical_left,
        }
    }
}

/// Glyphs for the inner rules of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGlyphs {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub cross: &'static str,
}

impl RuleGlyphs {
    /// `─ │ ┼`
    pub fn normal() -> Self {
        let set = line::NORMAL;
        Self {
            horizontal: set.horizontal,
            vertical: set.vertical,
            cross: set.cross,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub active_border: Style,
    pub error_border: Style,
    /// Title embedded in a box's top border.
    pub title: Style,
    pub error_title: Style,
    /// Dialog titles and section headings.
    pub heading: Style,
    pub label: Style,
    pub value: Style,
    pub muted: Style,
    pub diff_from: Style,
    pub diff_to: Style,
    pub grid_header: Style,
    pub active_row: Style,
    /// `[x]` selection markers inside grid cells.
    pub marker: Style,
    pub hint_key: Style,
    pub hint_desc: Style,
    pub frame: FrameGlyphs,
    pub rules: RuleGlyphs,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::new().fg(Color::DarkGray),
            active_border: Style::new().fg(Color::Cyan),
            error_border: Style::new().fg(Color::Red),
            title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            error_title: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            heading: Style::new().add_modifier(Modifier::BOLD),
            label: Style::new().fg(Color::Gray),
            value: Style::new().fg(Color::White),
            muted: Style::new().fg(Color::DarkGray),
            diff_from: Style::new().fg(Color::Red),
            diff_to: Style::new().fg(Color::Green),
            grid_header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            active_row: Style::new().fg(Color::Black).bg(Color::Cyan),
            marker: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
            hint_key: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            hint_desc: Style::new().fg(Color::DarkGray),
            frame: FrameGlyphs::rounded(),
            rules: RuleGlyphs::normal(),
        }
    }
}

impl Theme {
    /// Colorless theme: modifiers only. Diff sides stay distinguishable
    /// through dim vs. bold.
    pub fn monochrome() -> Self {
        let plain = Style::new();
        let bold = Style::new().add_modifier(Modifier::BOLD);
        Self {
            border: plain,
            active_border: bold,
            error_border: bold,
            title: bold,
            error_title: bold,
            heading: bold,
            label: plain,
            value: plain,
            muted: Style::new().add_modifier(Modifier::DIM),
            diff_from: Style::new().add_modifier(Modifier::DIM),
            diff_to: bold,
            grid_header: bold,
            active_row: Style::new().add_modifier(Modifier::REVERSED),
            marker: bold,
            hint_key: bold,
            hint_desc: plain,
            frame: FrameGlyphs::rounded(),
            rules: RuleGlyphs::normal(),
        }
    }
}

/// Render `text` in `style` as an ANSI string.
///
/// Unstyled or empty text comes back unchanged, so plain themes produce
/// plain output.
///
/// Colors go through crossterm, which drops them when `NO_COLOR` is set in
/// the environment (each color code degrades to an empty `ESC [ m`).
/// Modifiers are always written. Visible text and widths never depend on
/// the environment; use [`Theme::monochrome`] for byte-stable output.
pub fn paint(style: Style, text: &str) -> String {
    if text.is_empty() || style == Style::new() {
        return text.to_string();
    }
    content_style(style).apply(text).to_string()
}

fn content_style(style: Style) -> ContentStyle {
    let mut out = ContentStyle::new();
    out.foreground_color = style.fg.map(term_color);
    out.background_color = style.bg.map(term_color);

    let modifiers = style.add_modifier.difference(style.sub_modifier);
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::RAPID_BLINK, Attribute::RapidBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::HIDDEN, Attribute::Hidden),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ] {
        if modifiers.contains(modifier) {
            out.attributes.set(attribute);
        }
    }
    out
}

/// ratatui names the bright variants `Light*`; crossterm names the
/// normal ones `Dark*`.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::measure::visual_width;
    use crate::tui::sanitize::strip_escapes;

    #[test]
    fn unstyled_text_passes_through() {
        assert_eq!(paint(Style::new(), "plain"), "plain");
        assert_eq!(paint(Style::new().fg(Color::Red), ""), "");
    }

    #[test]
    fn painted_text_keeps_visual_width() {
        let painted = paint(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD), "héllo");
        assert_eq!(visual_width(&painted), 5);
        assert_eq!(strip_escapes(&painted), "héllo");
    }

    #[test]
    fn bold_emits_an_escape() {
        let painted = paint(Style::new().add_modifier(Modifier::BOLD), "x");
        assert!(painted.contains('\x1b'));
    }

    #[test]
    fn modifiers_are_byte_stable() {
        assert_eq!(paint(Style::new().add_modifier(Modifier::BOLD), "x"), "\x1b[1mx\x1b[0m");
        let theme = Theme::monochrome();
        assert_eq!(paint(theme.active_row, "row"), "\x1b[7mrow\x1b[0m");
    }

    #[test]
    fn colors_never_change_visible_text() {
        let theme = Theme::default();
        for style in [theme.border, theme.active_row, theme.diff_to, theme.hint_key] {
            let painted = paint(style, "日本 text");
            assert_eq!(strip_escapes(&painted), "日本 text");
            assert_eq!(visual_width(&painted), 9);
        }
    }

    #[test]
    fn glyph_sets_are_single_column() {
        let theme = Theme::default();
        for glyph in [
            theme.frame.top_left,
            theme.frame.top_right,
            theme.frame.bottom_left,
            theme.frame.bottom_right,
            theme.frame.horizontal,
            theme.frame.vertical,
            theme.rules.horizontal,
            theme.rules.vertical,
            theme.rules.cross,
        ] {
            assert_eq!(visual_width(glyph), 1, "{glyph:?}");
        }
        assert_eq!(theme.frame.top_left, "╭");
        assert_eq!(theme.rules.cross, "┼");
    }

    #[test]
    fn themes_differ() {
        assert_ne!(Theme::default(), Theme::monochrome());
    }
}
