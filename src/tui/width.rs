//! Width policy for framed output.
//!
//! Boxes fill a comfortable majority of the terminal, never narrower than
//! [`MIN_BOX_WIDTH`] or wider than [`MAX_BOX_WIDTH`], and never wider than
//! the terminal itself.

/// Border column on each side of a frame.
pub const BORDER_WIDTH: usize = 1;
/// Horizontal padding inside the border, per side.
pub const PADDING_H: usize = 2;
/// Border (2) + padding (4) consumed horizontally by a frame.
pub const HORIZONTAL_OVERHEAD: usize = 2 * BORDER_WIDTH + 2 * PADDING_H;

pub const MIN_BOX_WIDTH: usize = 40;
pub const MAX_BOX_WIDTH: usize = 80;
/// Share of the terminal a box takes, in percent.
const BOX_WIDTH_PERCENT: usize = 70;

/// Box width for a terminal of `term_width` columns; 0 means "no width".
pub fn box_width(term_width: usize) -> usize {
    if term_width == 0 {
        return 0;
    }
    (term_width.saturating_mul(BOX_WIDTH_PERCENT) / 100).clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH)
}

/// [`box_width`], but never wider than the terminal.
///
/// The 40-column floor would otherwise overflow narrow splits.
pub fn safe_box_width(term_width: usize) -> usize {
    box_width(term_width).min(term_width)
}

/// Columns available for text inside a box's border and padding.
pub fn box_content_width(term_width: usize) -> usize {
    safe_box_width(term_width).saturating_sub(HORIZONTAL_OVERHEAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_width_reference_points() {
        assert_eq!(box_width(0), 0);
        assert_eq!(box_width(10), 40);
        assert_eq!(box_width(100), 70);
        assert_eq!(box_width(200), 80);
    }

    #[test]
    fn box_width_stays_in_range() {
        for term in (0..400).chain([usize::MAX / 70, usize::MAX - 1, usize::MAX]) {
            let w = box_width(term);
            assert!(w == 0 || (MIN_BOX_WIDTH..=MAX_BOX_WIDTH).contains(&w), "{term} -> {w}");
        }
    }

    #[test]
    fn safe_width_never_exceeds_terminal() {
        assert_eq!(safe_box_width(0), 0);
        assert_eq!(safe_box_width(10), 10);
        assert_eq!(safe_box_width(50), 40);
        assert_eq!(safe_box_width(60), 42);
        for term in 1..300 {
            assert!(safe_box_width(term) <= term);
        }
        assert_eq!(safe_box_width(usize::MAX), MAX_BOX_WIDTH);
        assert_eq!(box_content_width(usize::MAX), MAX_BOX_WIDTH - HORIZONTAL_OVERHEAD);
    }

    #[test]
    fn content_width_subtracts_frame() {
        assert_eq!(HORIZONTAL_OVERHEAD, 6);
        assert_eq!(box_content_width(100), 64);
        assert_eq!(box_content_width(4), 0);
        assert_eq!(box_content_width(0), 0);
    }
}
