//! Static font-metric table.

use crate::error::{BadgeError, Result};

pub const DEFAULT_FONT: &str = "DejaVu Sans,Verdana,Geneva,sans-serif";
pub const DEFAULT_FONT_SIZE: u32 = 11;

/// Font family -> (size, average glyph width in pixels).
const FONT_WIDTHS: &[(&str, &[(u32, u32)])] = &[
    (
        "DejaVu Sans,Verdana,Geneva,sans-serif",
        &[(10, 9), (11, 10), (12, 11)],
    ),
    ("Arial, Helvetica, sans-serif", &[(11, 8)]),
];

/// A font family and size that resolved to a known average glyph width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    name: String,
    size: u32,
    average_width: u32,
}

impl Font {
    /// Look up `name` at `size`, rejecting unknown combinations.
    pub fn resolve(name: &str, size: u32) -> Result<Self> {
        let Some((_, sizes)) = FONT_WIDTHS.iter().find(|(family, _)| *family == name) else {
            return Err(BadgeError::UnknownFont {
                name: name.to_string(),
                available: font_names().join(", "),
            });
        };
        let Some(&(_, average_width)) = sizes.iter().find(|(s, _)| *s == size) else {
            return Err(BadgeError::UnknownFontSize {
                name: name.to_string(),
                size,
                available: sizes
                    .iter()
                    .map(|(s, _)| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        };
        Ok(Self {
            name: name.to_string(),
            size,
            average_width,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Average glyph width in pixels.
    pub fn average_width(&self) -> u32 {
        self.average_width
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT.to_string(),
            size: DEFAULT_FONT_SIZE,
            average_width: 10,
        }
    }
}

/// Names of all supported font families.
pub fn font_names() -> Vec<&'static str> {
    FONT_WIDTHS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_font_resolves_to_ten_pixels() {
        let font = Font::resolve(DEFAULT_FONT, DEFAULT_FONT_SIZE).unwrap();
        assert_eq!(font.average_width(), 10);
        assert_eq!(font, Font::default());
    }

    #[test]
    fn arial_eleven_is_known() {
        let font = Font::resolve("Arial, Helvetica, sans-serif", 11).unwrap();
        assert_eq!(font.average_width(), 8);
    }

    #[test]
    fn unknown_family_is_configuration_error() {
        let err = Font::resolve("Comic Sans", 11).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("Available fonts"));
    }

    #[test]
    fn unknown_size_is_rejected_eagerly() {
        let err = Font::resolve("Arial, Helvetica, sans-serif", 12).unwrap_err();
        assert!(matches!(err, BadgeError::UnknownFontSize { size: 12, .. }));
    }
}
