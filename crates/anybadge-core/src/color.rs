//! Named badge colors.

use crate::error::{BadgeError, Result};

pub const DEFAULT_COLOR: &str = "#4c1";
pub const DEFAULT_TEXT_COLOR: &str = "#fff";

/// Color names and their hex codes.
pub const COLORS: &[(&str, &str)] = &[
    ("WHITE", "#FFFFFF"),
    ("SILVER", "#C0C0C0"),
    ("GRAY", "#808080"),
    ("BLACK", "#000000"),
    ("RED", "#E05D44"),
    ("BRIGHT_RED", "#FF0000"),
    ("MAROON", "#800000"),
    ("OLIVE", "#808000"),
    ("LIME", "#00FF00"),
    ("BRIGHT_YELLOW", "#FFFF00"),
    ("YELLOW", "#DFB317"),
    ("GREEN", "#4C1"),
    ("YELLOW_GREEN", "#A4A61D"),
    ("AQUA", "#00FFFF"),
    ("TEAL", "#008080"),
    ("BLUE", "#0000FF"),
    ("NAVY", "#000080"),
    ("FUCHSIA", "#FF00FF"),
    ("PURPLE", "#800080"),
    ("ORANGE", "#FE7D37"),
    ("LIGHT_GREY", "#9F9F9F"),
];

/// Older color names were written without underscores (`brightred`,
/// `yellowgreen`, `lightgrey`); these prefixes mark where one goes.
const LEGACY_PREFIXES: &[&str] = &["BRIGHT", "YELLOW", "LIGHT"];

fn lookup(name: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, hex)| *hex)
}

/// Resolve a color specifier to a hex code.
///
/// `#`-prefixed specifiers are returned untouched. Names are matched
/// case-insensitively against [`COLORS`], then against legacy spellings.
pub fn resolve(spec: &str) -> Result<String> {
    if spec.starts_with('#') {
        return Ok(spec.to_string());
    }

    let name = spec.to_ascii_uppercase();
    if let Some(hex) = lookup(&name) {
        return Ok(hex.to_string());
    }

    for prefix in LEGACY_PREFIXES {
        if name.starts_with(prefix) && name != *prefix && !name.contains('_') {
            let respelled = name.replacen(prefix, &format!("{prefix}_"), 1);
            if let Some(hex) = lookup(&respelled) {
                return Ok(hex.to_string());
            }
        }
    }

    Err(BadgeError::InvalidColor {
        spec: spec.to_string(),
        available: COLORS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}
