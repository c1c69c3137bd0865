//! Placeholder substitution.
//!
//! Templates reference computed fields as `{{ name }}`. Substitution is a
//! single pass over the template, so text inserted for one placeholder is
//! never scanned for another.

use tracing::warn;

use crate::layout::Layout;
use crate::value::format_real;

/// Everything a template can reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<'a> {
    pub layout: Layout,
    pub font_name: &'a str,
    pub font_size: u32,
    pub label: &'a str,
    pub value_text: &'a str,
    pub color: &'a str,
    pub label_text_color: &'a str,
    pub value_text_color: &'a str,
    pub mask_id: &'a str,
}

impl Fields<'_> {
    /// Replacement text for a placeholder name, if it is known.
    pub fn lookup(&self, name: &str) -> Option<String> {
        let l = &self.layout;
        Some(match name {
            "badge width" => l.badge_width.to_string(),
            "font name" => self.font_name.to_string(),
            "font size" => self.font_size.to_string(),
            "label" => escape_xml(self.label),
            "value" => escape_xml(self.value_text),
            "label anchor" => format_real(l.label_anchor),
            "label anchor shadow" => format_real(l.label_anchor_shadow),
            "value anchor" => format_real(l.value_anchor),
            "value anchor shadow" => format_real(l.value_anchor_shadow),
            "color" => self.color.to_string(),
            "label text color" => self.label_text_color.to_string(),
            "value text color" => self.value_text_color.to_string(),
            "color split x" => l.color_split_x.to_string(),
            "value width" => l.value_width.to_string(),
            "mask id" => self.mask_id.to_string(),
            "value box width" => l.value_box_width.to_string(),
            "arc start" => l.arc_start.to_string(),
            _ => return None,
        })
    }
}

/// Substitute every `{{ name }}` placeholder in `template`.
///
/// Unknown placeholders are copied through unchanged and logged.
pub fn render(template: &str, fields: &Fields<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after_open[..end].trim();
        match fields.lookup(name) {
            Some(text) => out.push_str(&text),
            None => {
                warn!(placeholder = name, "template placeholder left unsubstituted");
                out.push_str(&rest[start..start + 2 + end + 2]);
            }
        }
        rest = &after_open[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Escape text for use inside SVG element content.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
