//! Style-aware text measurement.
//!
//! Rendered strings carry SGR codes, so "width" here always means terminal
//! columns of the visible text: escape sequences count as zero and wide
//! characters count as two. Truncation keeps escape sequences intact and
//! appends a reset when it cuts styled text, so a clipped line never bleeds
//! color into the next one.

use unicode_width::UnicodeWidthChar;

use super::sanitize::{escape_span, strip_escapes};

/// SGR reset, appended after a cut through styled text.
pub const RESET: &str = "\x1b[0m";

/// Columns occupied by one char. Control characters occupy none.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Visual width of `s`, ignoring escape sequences.
pub fn visual_width(s: &str) -> usize {
    strip_escapes(s).chars().map(char_width).sum()
}

/// Widest line in a multi-line string.
pub fn max_line_width(s: &str) -> usize {
    s.split('\n').map(visual_width).max().unwrap_or(0)
}

/// Clamp `s` to at most `max_width` columns.
///
/// Escape sequences are kept whole, including any that follow the cut, so a
/// hyperlink opened before the limit is still closed. Broken or unterminated
/// sequences are dropped. A wide char that would straddle the limit is
/// dropped whole, so the result may be one column short.
pub fn clamp_text_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut width = 0;
    let mut styled = false;
    let mut full = false;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(span) = escape_span(bytes, i) {
            if span.terminated {
                out.push_str(&s[i..span.end]);
                styled = true;
            }
            i = span.end;
            continue;
        }

        let Some(c) = s[i..].chars().next() else {
            break;
        };
        i += c.len_utf8();
        if full {
            continue;
        }
        let w = char_width(c);
        if width + w > max_width {
            full = true;
            continue;
        }
        width += w;
        out.push(c);
    }

    if styled {
        out.push_str(RESET);
    }
    out
}

/// Clamp, then right-pad with spaces: the result is exactly `width` columns.
pub fn fit_width(s: &str, width: usize) -> String {
    pad_right(&clamp_text_width(s, width), width)
}

/// Right-pad with spaces up to `width`. Never shortens.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = visual_width(s);
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current))
}

/// Left-pad with spaces up to `width`. Never shortens.
pub fn pad_left(s: &str, width: usize) -> String {
    let current = visual_width(s);
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - current), s)
}

/// Center within `width`; the odd leftover column goes to the right.
pub fn center(s: &str, width: usize) -> String {
    let current = visual_width(s);
    if current >= width {
        return s.to_string();
    }
    let free = width - current;
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(free - left))
}

/// Keep the first `max_chars` code points.
///
/// This counts chars, not columns: a run of wide characters survives at
/// up to twice the column budget.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Keep the last code points of `s` so it fits within `max_width` columns.
pub fn tail_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = char_width(c);
        if width + w > max_width {
            break;
        }
        width += w;
        start = i;
    }
    s[start..].to_string()
}
