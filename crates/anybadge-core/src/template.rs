//! Built-in templates and template source resolution.

use std::path::Path;

use tracing::debug;

use crate::error::{BadgeError, Result};
use crate::style::BadgeStyle;

pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.svg");
pub const GITLAB_SCOPED_TEMPLATE: &str = include_str!("../templates/gitlab_scoped.svg");

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: &[&str] = &["default", "gitlab_scoped"];

/// Look up a built-in template by name.
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "default" => Some(DEFAULT_TEMPLATE),
        "gitlab_scoped" => Some(GITLAB_SCOPED_TEMPLATE),
        _ => None,
    }
}

/// Where a badge's template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The `default` built-in.
    #[default]
    Default,
    /// Template text supplied by the caller: multi-line text is markup,
    /// single-line text is a built-in name or a file path.
    Text(String),
}

impl From<&str> for TemplateSource {
    fn from(text: &str) -> Self {
        TemplateSource::Text(text.to_string())
    }
}

impl From<String> for TemplateSource {
    fn from(text: String) -> Self {
        TemplateSource::Text(text)
    }
}

impl From<&Path> for TemplateSource {
    fn from(path: &Path) -> Self {
        TemplateSource::Text(path.display().to_string())
    }
}

/// Produce the template markup for `source` under `style`.
///
/// Scoped styles always use their own built-in template.
pub fn load(source: &TemplateSource, style: BadgeStyle) -> Result<String> {
    if style == BadgeStyle::GitlabScoped {
        return Ok(GITLAB_SCOPED_TEMPLATE.to_string());
    }

    let text = match source {
        TemplateSource::Default => return Ok(DEFAULT_TEMPLATE.to_string()),
        TemplateSource::Text(text) => text,
    };

    if text.contains('\n') {
        debug!("using literal template markup");
        return Ok(text.clone());
    }

    if let Some(markup) = builtin(text) {
        debug!(template = %text, "using built-in template");
        return Ok(markup.to_string());
    }

    debug!(path = %text, "reading template file");
    std::fs::read_to_string(text).map_err(|source| BadgeError::UnknownTemplate {
        name: text.clone(),
        source,
    })
}
