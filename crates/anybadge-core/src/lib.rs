//! # anybadge-core
//!
//! **Tier 0 (Badge Model)**
//!
//! Value classification, threshold coloring, text-width estimation, layout
//! and SVG rendering for anybadge badges. No CLI or network code lives here.
//!
//! ## What belongs here
//! * Color, font and template tables
//! * Value classification and printf-style formatting
//! * Threshold resolution
//! * Width estimation and layout geometry
//! * Placeholder rendering and file output
//!
//! ## Example
//! ```
//! use anybadge_core::{Badge, BadgeOptions};
//!
//! let badge = Badge::new(BadgeOptions::new("pylint", "5"))?;
//! assert_eq!(badge.layout().badge_width, 61);
//! assert!(badge.svg().contains(">pylint</text>"));
//! # Ok::<(), anybadge_core::BadgeError>(())
//! ```

pub mod badge;
pub mod color;
mod error;
pub mod font;
pub mod format;
pub mod layout;
pub mod render;
pub mod sequence;
pub mod style;
pub mod template;
pub mod threshold;
pub mod value;
pub mod width;

pub use badge::{Badge, BadgeOptions, output_path};
pub use error::{BadgeError, ErrorKind, Result};
pub use font::Font;
pub use layout::{Layout, Padding};
pub use sequence::IdSequence;
pub use style::{BadgeStyle, PRESETS, Preset, preset};
pub use template::TemplateSource;
pub use threshold::{Thresholds, resolve_color};
pub use value::{ClassifiedValue, ValueKind, classify};
pub use width::WidthModel;
