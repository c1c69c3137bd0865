//! Badge value classification.

use std::fmt;

use semver::Version;
use tracing::debug;

use crate::error::{BadgeError, Result};

/// Semantic type of a badge value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Float,
    SemanticVersion,
    String,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::SemanticVersion => "semantic version",
            ValueKind::String => "string",
        }
    }
}

/// A badge value parsed into its semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedValue {
    Integer(i64),
    Float(f64),
    Version(Version),
    Text(String),
}

impl ClassifiedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ClassifiedValue::Integer(_) => ValueKind::Integer,
            ClassifiedValue::Float(_) => ValueKind::Float,
            ClassifiedValue::Version(_) => ValueKind::SemanticVersion,
            ClassifiedValue::Text(_) => ValueKind::String,
        }
    }
}

impl fmt::Display for ClassifiedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifiedValue::Integer(i) => write!(f, "{i}"),
            ClassifiedValue::Float(x) => f.write_str(&format_real(*x)),
            ClassifiedValue::Version(v) => write!(f, "{v}"),
            ClassifiedValue::Text(s) => f.write_str(s),
        }
    }
}

/// Classify `raw`.
///
/// With `semver` set the value must parse as a semantic version; a failure
/// is an error rather than a fallback to [`ValueKind::String`], since a
/// string value would silently skip threshold ordering.
pub fn classify(raw: &str, semver: bool) -> Result<ClassifiedValue> {
    let classified = if semver {
        ClassifiedValue::Version(parse_version(raw)?)
    } else if let Some(i) = parse_integer(raw) {
        ClassifiedValue::Integer(i)
    } else if let Some(x) = parse_real(raw) {
        ClassifiedValue::Float(x)
    } else {
        ClassifiedValue::Text(raw.to_string())
    };
    debug!(value = raw, kind = classified.kind().as_str(), "classified badge value");
    Ok(classified)
}

pub(crate) fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw.trim()).map_err(|source| BadgeError::InvalidVersion {
        input: raw.to_string(),
        source,
    })
}

pub(crate) fn parse_real(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// An integer is a value that parses both as a real and as an integer, with
/// the two readings equal. This must be checked before [`parse_real`]
/// because every integer string also parses as a real.
fn parse_integer(raw: &str) -> Option<i64> {
    let real = parse_real(raw)?;
    let int = raw.trim().parse::<i64>().ok()?;
    (real.trunc() == real && real == int as f64).then_some(int)
}

/// Shortest round-trip text for a real, always showing a fractional part
/// for finite values (`22.0`, `52.5`).
pub fn format_real(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() && x > 0.0 {
        "inf".to_string()
    } else if x.is_infinite() {
        "-inf".to_string()
    } else {
        format!("{x:?}")
    }
}
