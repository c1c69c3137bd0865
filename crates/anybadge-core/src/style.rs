//! Visual styles and preset threshold bundles.

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::threshold::Thresholds;

/// Visual badge style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Flat two-segment badge.
    #[default]
    Default,
    /// Pill-shaped badge with an inner rounded value box.
    GitlabScoped,
}

impl BadgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeStyle::Default => "default",
            BadgeStyle::GitlabScoped => "gitlab-scoped",
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeStyle {
    type Err = std::convert::Infallible;

    /// Unrecognized names fall back to [`BadgeStyle::Default`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gitlab-scoped" => BadgeStyle::GitlabScoped,
            _ => BadgeStyle::Default,
        })
    }
}

/// A named bundle of thresholds with a default label and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub thresholds: &'static str,
    pub label: &'static str,
    pub suffix: Option<&'static str>,
}

impl Preset {
    /// Thresholds parsed from the space-separated `key=color` list.
    pub fn thresholds(&self) -> Result<Thresholds> {
        Thresholds::from_pairs(self.thresholds.split_whitespace())
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "pylint",
        thresholds: "2=red 4=orange 8=yellow 10=green",
        label: "pylint",
        suffix: None,
    },
    Preset {
        name: "coverage",
        thresholds: "50=red 60=orange 80=yellow 100=green",
        label: "coverage",
        suffix: Some("%"),
    },
];

/// Find a built-in preset, ignoring case.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
