//! # Dialogs
//!
//! Prompts built from the other components:
//!
//! - [`confirm_dialog`](Renderer::confirm_dialog) and
//!   [`input_dialog`](Renderer::input_dialog): fixed 40-column boxes with a
//!   title, a body or input echo, and a key hint.
//! - [`confirm_preview_dialog`](Renderer::confirm_preview_dialog): a titled
//!   box at terminal width showing what is about to change before the user
//!   confirms.

use crate::tui::Renderer;
use crate::tui::components::diff::DiffRow;
use crate::tui::components::frame::render_frame;
use crate::tui::components::table::TableRow;
use crate::tui::measure::{tail_width, visual_width};
use crate::tui::sanitize::{sanitize_one_line, sanitize_text};
use crate::tui::theme::paint;
use crate::tui::width::HORIZONTAL_OVERHEAD;

pub const DIALOG_WIDTH: usize = 40;
pub const CONFIRM_HINT: &str = "y: confirm | n: cancel";
pub const INPUT_HINT: &str = "enter: submit | esc: cancel";
const INPUT_PROMPT: &str = "> ";
const CURSOR_GLYPH: &str = "█";

impl Renderer {
    /// Title, body and a y/n hint in a 40-column box.
    pub fn confirm_dialog(&self, title: &str, body: &str) -> String {
        let content = [
            paint(self.theme.heading, &sanitize_one_line(title)),
            String::new(),
            sanitize_text(body),
            String::new(),
            paint(self.theme.muted, CONFIRM_HINT),
        ]
        .join("\n");
        render_frame(&self.theme, self.theme.active_border, &content, DIALOG_WIDTH)
    }

    /// Title, echoed input with a block cursor, and a submit hint.
    ///
    /// Input longer than the field scrolls: the tail stays visible so the
    /// cursor is always on screen.
    pub fn input_dialog(&self, title: &str, input: &str) -> String {
        let input = sanitize_text(input).replace(|c: char| c == '\n' || c == '\t', " ");
        let field = DIALOG_WIDTH - HORIZONTAL_OVERHEAD;
        let room = field.saturating_sub(visual_width(INPUT_PROMPT) + visual_width(CURSOR_GLYPH));
        let echo = format!("{INPUT_PROMPT}{}{CURSOR_GLYPH}", tail_width(&input, room));

        let content = [
            paint(self.theme.heading, &sanitize_one_line(title)),
            String::new(),
            echo,
            String::new(),
            paint(self.theme.muted, INPUT_HINT),
        ]
        .join("\n");
        render_frame(&self.theme, self.theme.active_border, &content, DIALOG_WIDTH)
    }

    /// Summary rows, field changes and a confirm hint in one titled box.
    ///
    /// Sections without rows are left out entirely.
    pub fn confirm_preview_dialog(
        &self,
        title: &str,
        summary: &[TableRow],
        changes: &[DiffRow],
        width: usize,
    ) -> String {
        let mut sections = Vec::with_capacity(3);
        if !summary.is_empty() {
            sections.push(format!(
                "{}\n{}",
                paint(self.theme.heading, "Summary"),
                self.table_body(summary, width)
            ));
        }
        if !changes.is_empty() {
            sections.push(format!(
                "{}\n{}",
                paint(self.theme.heading, "Changes"),
                self.diff_body(changes, width)
            ));
        }
        sections.push(paint(self.theme.muted, CONFIRM_HINT));

        self.titled_box(title, &sections.join("\n\n"), width)
    }
}
