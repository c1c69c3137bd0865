//! Approximate text width under a proportional font.
//!
//! There are no real font metrics here. Each character is weighted against
//! the font's average glyph width using a small table of character buckets,
//! which is close enough to size a badge around its text.

/// How characters outside the bucket table are weighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidthModel {
    /// Unknown characters count as a full average glyph.
    #[default]
    Standard,
    /// Unknown characters count as half a glyph, pictographs as three quarters.
    Pictographic,
}

/// Width buckets as (characters, percentage of the average glyph width).
///
/// Order matters: the first bucket containing a character wins.
const CHAR_WIDTH_PERCENTAGES: &[(&str, f64)] = &[
    ("lij|' ", 40.0),
    ("![]fI.,:;/\\t", 50.0),
    ("`-(){}r\"", 60.0),
    ("*^zcsJkvxy", 70.0),
    ("aebdhnopqug#$L+<>=?_~FZT0123456789", 70.0),
    ("BSPEAKVXY&UwNRCHD", 70.0),
    ("QGOMm%W@", 100.0),
];

const PICTOGRAPH_PERCENTAGE: f64 = 75.0;

/// Code point ranges treated as pictographs (emoji and symbol blocks).
const PICTOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x2600, 0x26FF),   // Miscellaneous Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F1E6, 0x1F1FF), // Regional indicators
    (0x1F300, 0x1F5FF), // Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map
    (0x1F700, 0x1F77F), // Alchemical Symbols
    (0x1F780, 0x1F7FF), // Geometric Shapes Extended
    (0x1F800, 0x1F8FF), // Supplemental Arrows-C
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
];

/// Whether `c` falls in one of the pictograph ranges.
pub fn is_pictograph(c: char) -> bool {
    let cp = c as u32;
    PICTOGRAPH_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

fn char_percentage(c: char, model: WidthModel) -> f64 {
    for (chars, pct) in CHAR_WIDTH_PERCENTAGES {
        if chars.contains(c) {
            return *pct;
        }
    }
    match model {
        WidthModel::Standard => 100.0,
        WidthModel::Pictographic if is_pictograph(c) => PICTOGRAPH_PERCENTAGE,
        WidthModel::Pictographic => 50.0,
    }
}

/// Estimate the pixel width of `text`.
///
/// Per-character widths are summed as reals and the total is truncated.
///
/// ```
/// use anybadge_core::width::{WidthModel, estimate_width};
///
/// assert_eq!(estimate_width("hello", 10, WidthModel::Standard), 29);
/// assert_eq!(estimate_width("GOOGLE|ijkl", 10, WidthModel::Standard), 77);
/// ```
pub fn estimate_width(text: &str, font_width: u32, model: WidthModel) -> u32 {
    let average = f64::from(font_width);
    let size: f64 = text
        .chars()
        .map(|c| char_percentage(c, model) / 100.0 * average)
        .sum();
    size as u32
}

/// Width assuming every character is a full average glyph.
///
/// Useful as an upper-bound sanity check for [`estimate_width`].
pub fn fixed_width(text: &str, font_width: u32) -> u32 {
    text.chars().count() as u32 * font_width
}
