//! Error taxonomy for badge construction and output.

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`BadgeError`].
///
/// Callers that only need to decide how to report a failure (exit code,
/// HTTP status, hint text) can match on this instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad inputs detected while building a badge.
    Configuration,
    /// The output file already exists and overwrite was not requested.
    Conflict,
    /// A value or threshold key could not be read as the required type.
    Parse,
    /// Filesystem failure while writing output.
    Io,
}

/// Errors raised while building or writing a badge.
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("Either a label or a value must be provided for a badge")]
    EmptyBadge,

    #[error("Font name \"{name}\" not found. Available fonts: {available}")]
    UnknownFont { name: String, available: String },

    #[error("Font size {size} is not supported for font \"{name}\". Available sizes: {available}")]
    UnknownFontSize {
        name: String,
        size: u32,
        available: String,
    },

    #[error("Invalid color code \"{spec}\". Valid color codes are: {available}")]
    InvalidColor { spec: String, available: String },

    #[error("Template \"{name}\" is neither a built-in template nor a readable file: {source}")]
    UnknownTemplate {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {side} padding {chars}: must be a finite number between 0 and {max}")]
    InvalidPadding {
        side: &'static str,
        chars: f64,
        max: f64,
    },

    #[error("Invalid value format \"{format}\": {reason}")]
    InvalidFormat { format: String, reason: String },

    #[error("File location may not be a directory: {}", .0.display())]
    TargetIsDirectory(PathBuf),

    #[error("File \"{}\" already exists", .0.display())]
    FileExists(PathBuf),

    #[error("Invalid semantic version \"{input}\": {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("Threshold key \"{key}\" cannot be compared with a {expected} value")]
    InvalidThresholdKey { key: String, expected: &'static str },

    #[error("Invalid threshold \"{0}\": expected <key>=<color>")]
    MalformedThreshold(String),

    #[error("Failed to write badge: {0}")]
    Io(#[from] std::io::Error),
}

impl BadgeError {
    /// Category used for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BadgeError::EmptyBadge
            | BadgeError::UnknownFont { .. }
            | BadgeError::UnknownFontSize { .. }
            | BadgeError::InvalidColor { .. }
            | BadgeError::UnknownTemplate { .. }
            | BadgeError::InvalidFormat { .. }
            | BadgeError::InvalidPadding { .. }
            | BadgeError::TargetIsDirectory(_) => ErrorKind::Configuration,
            BadgeError::FileExists(_) => ErrorKind::Conflict,
            BadgeError::InvalidVersion { .. }
            | BadgeError::InvalidThresholdKey { .. }
            | BadgeError::MalformedThreshold(_) => ErrorKind::Parse,
            BadgeError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, BadgeError>;
