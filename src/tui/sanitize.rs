//! # Text Sanitizer
//!
//! Every string that reaches the terminal passes through here first. Labels,
//! values and names come from API responses and are written by agents or
//! users, so they must never be able to move the cursor, retitle the window,
//! overdraw other text, or flip reading order.
//!
//! Removal order:
//!
//! 1. CSI sequences: `ESC [` params (`0x30-0x3F`), intermediates
//!    (`0x20-0x2F`), final byte (`0x40-0x7E`)
//! 2. String sequences: OSC `ESC ]`, DCS `ESC P`, SOS `ESC X`, PM `ESC ^`,
//!    APC `ESC _`, ended by ST (`ESC \`) or BEL. Unterminated ones are
//!    dropped through end of input.
//!
//!    Both kinds are also recognized in their single-character C1 form
//!    (`U+009B` CSI, `U+009D` OSC, ...), parameters included.
//! 3. Remaining control characters, except `\n` and `\t`
//! 4. Bidi overrides, isolates and directional marks

use std::borrow::Cow;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;
/// First UTF-8 byte of U+0080..=U+00BF, which holds the C1 introducers.
const C1_LEAD: u8 = 0xC2;

/// Strip escape sequences, control characters and bidi controls.
///
/// Newlines and tabs survive; everything else that could steer the terminal
/// is dropped. Never fails: broken sequences are consumed best-effort.
pub fn sanitize_text(s: &str) -> String {
    strip_escapes(s)
        .chars()
        .filter(|&c| !is_stripped_control(c) && !is_bidi_control(c))
        .collect()
}

/// Like [`sanitize_text`], but guarantees a single physical line.
///
/// Line breaks and tabs become spaces and the result is trimmed. Used for
/// anything that must fit one table cell or one border segment.
pub fn sanitize_one_line(s: &str) -> String {
    let cleaned: String = sanitize_text(s)
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect();
    cleaned.trim().to_string()
}

/// Remove CSI and string-terminated escape sequences.
///
/// Only the sequences are removed; a lone `ESC` that starts neither kind is
/// left for the control-character pass. Returns `Cow::Borrowed` when the
/// input contains no sequence.
pub fn strip_escapes(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if !bytes.iter().any(|&b| b == ESC || b == C1_LEAD) {
        return Cow::Borrowed(s);
    }

    // Introducers are ESC (ASCII) or a C1 lead byte, so every slice boundary
    // here is a char boundary.
    let mut out = String::with_capacity(s.len());
    let mut run_start = 0;
    let mut stripped = false;
    let mut i = 0;
    while i < bytes.len() {
        match escape_span(bytes, i) {
            Some(span) => {
                out.push_str(&s[run_start..i]);
                i = span.end;
                run_start = i;
                stripped = true;
            }
            None => i += 1,
        }
    }
    if !stripped {
        return Cow::Borrowed(s);
    }
    out.push_str(&s[run_start..]);
    Cow::Owned(out)
}

/// Extent of an escape sequence in a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EscapeSpan {
    /// Index just past the sequence (exclusive).
    pub end: usize,
    /// Whether the sequence reached its final byte or string terminator.
    pub terminated: bool,
}

/// The escape sequence introduced at `pos`, if one starts there.
///
/// Recognizes the 7-bit forms (`ESC [`, `ESC ]`, ...) and their UTF-8
/// encoded C1 equivalents (`U+009B` CSI, `U+009D` OSC, ...).
pub(crate) fn escape_span(bytes: &[u8], pos: usize) -> Option<EscapeSpan> {
    let body = pos + 2;
    match (*bytes.get(pos)?, *bytes.get(pos + 1)?) {
        (ESC, b'[') | (C1_LEAD, 0x9B) => Some(skip_csi(bytes, body)),
        (ESC, b']' | b'P' | b'X' | b'^' | b'_') | (C1_LEAD, 0x90 | 0x98 | 0x9D | 0x9E | 0x9F) => {
            Some(skip_string(bytes, body))
        }
        _ => None,
    }
}

/// Skip a CSI body starting after its introducer.
fn skip_csi(bytes: &[u8], pos: usize) -> EscapeSpan {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x30..=0x3F | 0x20..=0x2F => i += 1,
            0x40..=0x7E => {
                return EscapeSpan {
                    end: i + 1,
                    terminated: true,
                };
            }
            // Broken sequence: drop what we consumed, keep the stray byte.
            _ => {
                return EscapeSpan {
                    end: i,
                    terminated: false,
                };
            }
        }
    }
    EscapeSpan {
        end: bytes.len(),
        terminated: false,
    }
}

/// Skip an OSC/DCS/SOS/PM/APC body. Unterminated bodies run to the end.
fn skip_string(bytes: &[u8], pos: usize) -> EscapeSpan {
    let mut i = pos;
    while i < bytes.len() {
        let end = match (bytes[i], bytes.get(i + 1).copied()) {
            (BEL, _) => Some(i + 1),
            (ESC, Some(b'\\')) | (C1_LEAD, Some(0x9C)) => Some(i + 2),
            _ => None,
        };
        if let Some(end) = end {
            return EscapeSpan {
                end,
                terminated: true,
            };
        }
        i += 1;
    }
    EscapeSpan {
        end: bytes.len(),
        terminated: false,
    }
}

/// C0 (minus `\n` and `\t`), DEL, and the C1 block.
fn is_stripped_control(c: char) -> bool {
    match c {
        '\n' | '\t' => false,
        '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}' => true,
        _ => false,
    }
}

/// Directional embeddings/overrides, isolates, and LRM/RLM.
pub fn is_bidi_control(c: char) -> bool {
    matches!(
        c,
        '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{200E}' | '\u{200F}'
    )
}
