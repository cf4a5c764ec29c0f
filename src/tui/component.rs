use super::theme::Theme;

/// A props-in-struct component.
///
/// Components carry everything they need as fields (rows, width, flags) and
/// render to a finished string. The theme is passed in rather than stored so
/// the same props can be drawn under any palette.
///
/// Rendering must be pure: same props and theme, same output.
pub trait Component {
    fn render(&self, theme: &Theme) -> String;
}
