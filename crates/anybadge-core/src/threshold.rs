//! Threshold-based color selection.
//!
//! A threshold is an exclusive upper bound: a value picks the color of the
//! first threshold (in ascending order) that it is strictly less than. A
//! value equal to a threshold falls through to the next one up.

use std::cmp::Ordering;

use semver::Version;
use tracing::debug;

use crate::error::{BadgeError, Result};
use crate::value::{ClassifiedValue, ValueKind, parse_real, parse_version};

/// Ordered mapping of threshold keys to color specifiers.
///
/// Keys stay as text until resolution, where they are converted to the
/// type of the badge value. Re-inserting a key replaces its color but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thresholds {
    entries: Vec<(String, String)>,
}

impl Thresholds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=color` pairs such as `2=red 4=orange`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut thresholds = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, color)) = pair.split_once('=') else {
                return Err(BadgeError::MalformedThreshold(pair.to_string()));
            };
            if key.is_empty() {
                return Err(BadgeError::MalformedThreshold(pair.to_string()));
            }
            thresholds.insert(key, color);
        }
        Ok(thresholds)
    }

    pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
        let key = key.into();
        let color = color.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((key, color)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c.as_str()))
    }

    fn exact(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, c)| c)
    }
}

impl<K: Into<String>, C: Into<String>> FromIterator<(K, C)> for Thresholds {
    fn from_iter<T: IntoIterator<Item = (K, C)>>(iter: T) -> Self {
        let mut thresholds = Self::new();
        for (key, color) in iter {
            thresholds.insert(key, color);
        }
        thresholds
    }
}

/// Comparable threshold key, converted to the value's type.
#[derive(Debug, Clone, PartialEq)]
enum Bound {
    Real(f64),
    Version(Version),
}

impl Bound {
    fn compare(&self, other: &Bound) -> Ordering {
        match (self, other) {
            (Bound::Real(a), Bound::Real(b)) => a.total_cmp(b),
            (Bound::Version(a), Bound::Version(b)) => a.cmp(b),
            // Keys are always converted to a single type.
            (Bound::Real(_), Bound::Version(_)) => Ordering::Less,
            (Bound::Version(_), Bound::Real(_)) => Ordering::Greater,
        }
    }
}

fn to_bound(key: &str, kind: ValueKind) -> Result<Bound> {
    let invalid = || BadgeError::InvalidThresholdKey {
        key: key.to_string(),
        expected: kind.as_str(),
    };
    match kind {
        ValueKind::SemanticVersion => parse_version(key).map(Bound::Version),
        // Integer values compare against keys truncated toward zero.
        ValueKind::Integer => parse_real(key)
            .map(|x| Bound::Real(x.trunc()))
            .ok_or_else(invalid),
        ValueKind::Float => parse_real(key).map(Bound::Real).ok_or_else(invalid),
        ValueKind::String => Err(invalid()),
    }
}

fn value_bound(value: &ClassifiedValue) -> Option<Bound> {
    match value {
        ClassifiedValue::Integer(i) => Some(Bound::Real(*i as f64)),
        ClassifiedValue::Float(x) => Some(Bound::Real(*x)),
        ClassifiedValue::Version(v) => Some(Bound::Version(v.clone())),
        ClassifiedValue::Text(_) => None,
    }
}

/// Pick the color specifier for `value`.
///
/// The returned specifier is not yet resolved to a hex code.
pub fn resolve_color(
    value: &ClassifiedValue,
    thresholds: &Thresholds,
    default_color: &str,
    use_max_when_value_exceeds: bool,
) -> Result<String> {
    if thresholds.is_empty() {
        return Ok(default_color.to_string());
    }

    let Some(bound) = value_bound(value) else {
        let raw = value.to_string();
        let color = thresholds.exact(&raw).unwrap_or(default_color);
        debug!(value = %raw, color, "string value matched against thresholds");
        return Ok(color.to_string());
    };

    let mut ordered = thresholds
        .iter()
        .map(|(key, color)| Ok((to_bound(key, value.kind())?, color)))
        .collect::<Result<Vec<_>>>()?;
    ordered.sort_by(|(a, _), (b, _)| a.compare(b));

    if let Some((_, color)) = ordered
        .iter()
        .find(|(key, _)| bound.compare(key) == Ordering::Less)
    {
        return Ok(color.to_string());
    }

    let color = match ordered.last() {
        Some((_, max_color)) if use_max_when_value_exceeds => *max_color,
        _ => default_color,
    };
    debug!(value = %value, color, "value exceeds every threshold");
    Ok(color.to_string())
}
