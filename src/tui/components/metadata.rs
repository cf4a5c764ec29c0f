//! Nested metadata as an indented key/value listing:
//!
//! ```text
//! owner: alice
//! limits:
//!   cpu: 2
//!   tags:
//!     - fast
//!     - gpu
//! ```

use crate::core::metadata::MetaValue;
use crate::tui::Renderer;
use crate::tui::sanitize::sanitize_one_line;
use crate::tui::theme::paint;

const INDENT: &str = "  ";

impl Renderer {
    /// Metadata in a titled box.
    pub fn metadata(&self, title: &str, value: &MetaValue, width: usize) -> String {
        self.titled_box(title, &self.metadata_lines(value).join("\n"), width)
    }

    /// One line per scalar, nested collections indented below their key.
    pub fn metadata_lines(&self, value: &MetaValue) -> Vec<String> {
        let mut out = Vec::new();
        self.push_value(value, 0, &mut out);
        out
    }

    fn push_value(&self, value: &MetaValue, depth: usize, out: &mut Vec<String>) {
        match value {
            MetaValue::Object(entries) if !entries.is_empty() => self.push_object(entries, depth, out),
            MetaValue::Array(items) if !items.is_empty() => self.push_array(items, depth, out),
            inline => out.push(format!("{}{}", INDENT.repeat(depth), self.inline(inline))),
        }
    }

    fn push_object(&self, entries: &[(String, MetaValue)], depth: usize, out: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        for (key, value) in entries {
            let key = paint(self.theme.label, &sanitize_one_line(key));
            if value.is_inline() {
                out.push(format!("{indent}{key}: {}", self.inline(value)));
            } else {
                out.push(format!("{indent}{key}:"));
                self.push_value(value, depth + 1, out);
            }
        }
    }

    fn push_array(&self, items: &[MetaValue], depth: usize, out: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        for item in items {
            if item.is_inline() {
                out.push(format!("{indent}- {}", self.inline(item)));
            } else {
                out.push(format!("{indent}-"));
                self.push_value(item, depth + 1, out);
            }
        }
    }

    fn inline(&self, value: &MetaValue) -> String {
        match value {
            MetaValue::Null => paint(self.theme.muted, "null"),
            MetaValue::Bool(b) => paint(self.theme.value, &b.to_string()),
            MetaValue::Number(n) => paint(self.theme.value, &n.to_string()),
            MetaValue::String(s) if s.is_empty() => paint(self.theme.muted, "\"\""),
            MetaValue::String(s) => paint(self.theme.value, &sanitize_one_line(s)),
            MetaValue::Array(_) => paint(self.theme.muted, "[]"),
            MetaValue::Object(_) => paint(self.theme.muted, "{}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{plain, plain_lines};
    use crate::tui::measure::visual_width;
    use crate::tui::width::safe_box_width;
    use serde_json::json;

    fn lines(value: serde_json::Value) -> Vec<String> {
        Renderer::default()
            .metadata_lines(&MetaValue::from(value))
            .iter()
            .map(|l| plain(l))
            .collect()
    }

    #[test]
    fn scalars_render_inline() {
        assert_eq!(lines(json!(null)), vec!["null"]);
        assert_eq!(lines(json!(false)), vec!["false"]);
        assert_eq!(lines(json!(42)), vec!["42"]);
        assert_eq!(lines(json!("")), vec!["\"\""]);
        assert_eq!(lines(json!([])), vec!["[]"]);
        assert_eq!(lines(json!({})), vec!["{}"]);
    }

    #[test]
    fn nested_structure_is_indented() {
        let out = lines(json!({
            "limits": { "cpu": 2, "tags": ["fast", "gpu"] },
            "owner": "alice"
        }));
        assert_eq!(
            out,
            vec![
                "limits:",
                "  cpu: 2",
                "  tags:",
                "    - fast",
                "    - gpu",
                "owner: alice",
            ]
        );
    }

    #[test]
    fn keys_render_in_source_order() {
        assert_eq!(lines(json!({ "zeta": 1, "alpha": 2 })), vec!["zeta: 1", "alpha: 2"]);
        let out = lines(json!({ "owner": "alice", "limits": { "max": 9, "cpu": 2 } }));
        assert_eq!(out, vec!["owner: alice", "limits:", "  max: 9", "  cpu: 2"]);
    }

    #[test]
    fn objects_inside_arrays() {
        let out = lines(json!([{ "id": 1 }, [], "x"]));
        assert_eq!(out, vec!["-", "  id: 1", "- []", "- x"]);
    }

    #[test]
    fn keys_and_values_are_sanitized() {
        let out = lines(json!({ "k\u{202E}ey": "line\none\x1b[31m" }));
        assert_eq!(out, vec!["key: line one"]);
    }

    #[test]
    fn metadata_box_is_exact_width() {
        let value = MetaValue::from(json!({ "description": "d".repeat(200), "n": 1 }));
        let out = Renderer::default().metadata("Metadata", &value, 90);
        for line in plain_lines(&out) {
            assert_eq!(visual_width(&line), safe_box_width(90));
        }
    }
}
