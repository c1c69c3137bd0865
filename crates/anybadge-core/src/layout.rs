//! Badge geometry.
//!
//! ```text
//! ┌──────────────┬──────────────────┐
//! │    label     │      value       │
//! └──────────────┴──────────────────┘
//! ◀─ label_width ▶◀── value_width ──▶
//!                ▲
//!          color_split_x
//! ```

use crate::error::{BadgeError, Result};
use crate::width::{WidthModel, estimate_width};

/// Gap between the value box and the inner rounded box of scoped styles.
pub const VALUE_BOX_INSET: i64 = 9;
/// Distance from the right edge where the closing arc starts.
pub const ARC_INSET: i64 = 10;

/// Padding, in average glyph widths, applied on each side of the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub label: f64,
    pub value: f64,
}

impl Padding {
    pub const DEFAULT_CHARS: f64 = 0.5;
    /// Largest accepted padding on one side, in characters.
    pub const MAX_CHARS: f64 = 1000.0;

    pub fn uniform(chars: f64) -> Self {
        Self {
            label: chars,
            value: chars,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_CHARS)
    }
}

impl Padding {
    /// Reject negative, non-finite or oversized padding.
    pub fn validate(&self) -> Result<()> {
        for (side, chars) in [("label", self.label), ("value", self.value)] {
            if !chars.is_finite() || !(0.0..=Self::MAX_CHARS).contains(&chars) {
                return Err(BadgeError::InvalidPadding {
                    side,
                    chars,
                    max: Self::MAX_CHARS,
                });
            }
        }
        Ok(())
    }
}

/// Computed positions for one badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub label_width: u32,
    pub value_width: u32,
    pub badge_width: u32,
    pub color_split_x: u32,
    pub label_anchor: f64,
    pub value_anchor: f64,
    pub label_anchor_shadow: f64,
    pub value_anchor_shadow: f64,
    /// Width of the inner rounded box; negative for very short values.
    pub value_box_width: i64,
    pub arc_start: i64,
}

/// Width of a text box: zero for empty text, otherwise the estimated text
/// width plus padding on both sides, truncated.
pub fn box_width(text: &str, padding_chars: f64, font_width: u32, model: WidthModel) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let text_width = f64::from(estimate_width(text, font_width, model));
    (text_width + 2.0 * padding_chars * f64::from(font_width)) as u32
}

impl Layout {
    /// Lay out `label` and the fully composed `value_text`.
    pub fn compute(
        label: &str,
        value_text: &str,
        font_width: u32,
        padding: Padding,
        model: WidthModel,
    ) -> Self {
        let label_width = box_width(label, padding.label, font_width, model);
        let value_width = box_width(value_text, padding.value, font_width, model);
        Self::from_widths(label_width, value_width)
    }

    /// Derive every position from the two box widths.
    pub fn from_widths(label_width: u32, value_width: u32) -> Self {
        let badge_width = label_width.saturating_add(value_width);
        let color_split_x = label_width;
        let label_anchor = f64::from(color_split_x) / 2.0;
        let value_anchor =
            f64::from(color_split_x) + f64::from(badge_width - color_split_x) / 2.0;
        Self {
            label_width,
            value_width,
            badge_width,
            color_split_x,
            label_anchor,
            value_anchor,
            label_anchor_shadow: label_anchor + 1.0,
            value_anchor_shadow: value_anchor + 1.0,
            value_box_width: i64::from(value_width) - VALUE_BOX_INSET,
            arc_start: i64::from(badge_width) - ARC_INSET,
        }
    }
}
