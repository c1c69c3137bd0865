//! The badge aggregate.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::color::{self, DEFAULT_COLOR, DEFAULT_TEXT_COLOR};
use crate::error::{BadgeError, Result};
use crate::font::{DEFAULT_FONT, DEFAULT_FONT_SIZE, Font};
use crate::format;
use crate::layout::{Layout, Padding};
use crate::render::{Fields, render};
use crate::sequence::IdSequence;
use crate::style::BadgeStyle;
use crate::template::{self, TemplateSource};
use crate::threshold::{Thresholds, resolve_color};
use crate::value::{ClassifiedValue, classify};
use crate::width::WidthModel;

/// File extension written by [`Badge::write`].
pub const SVG_EXTENSION: &str = "svg";

/// Inputs for a badge.
///
/// Every field has a default, so callers only set what they need:
///
/// ```
/// use anybadge_core::{Badge, BadgeOptions, Thresholds};
///
/// let thresholds = Thresholds::from_pairs(["2=red", "4=orange", "8=yellow", "10=green"])?;
/// let badge = Badge::new(BadgeOptions::new("pylint", "2.32").thresholds(thresholds))?;
/// assert_eq!(badge.color(), "#FE7D37");
/// # Ok::<(), anybadge_core::BadgeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeOptions {
    pub label: String,
    pub value: String,
    pub font_name: String,
    pub font_size: u32,
    pub padding: Padding,
    pub template: TemplateSource,
    pub style: BadgeStyle,
    pub value_prefix: String,
    pub value_suffix: String,
    pub thresholds: Thresholds,
    pub default_color: String,
    pub use_max_when_value_exceeds: bool,
    pub value_format: Option<String>,
    /// A single color, or `label,value` colors.
    pub text_color: String,
    pub semver: bool,
    pub width_model: WidthModel,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            value: String::new(),
            font_name: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            padding: Padding::default(),
            template: TemplateSource::Default,
            style: BadgeStyle::Default,
            value_prefix: String::new(),
            value_suffix: String::new(),
            thresholds: Thresholds::new(),
            default_color: DEFAULT_COLOR.to_string(),
            use_max_when_value_exceeds: true,
            value_format: None,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            semver: false,
            width_model: WidthModel::Standard,
        }
    }
}

impl BadgeOptions {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    /// Same padding on both sides of label and value.
    pub fn padding(mut self, chars: f64) -> Self {
        self.padding = Padding::uniform(chars);
        self
    }

    pub fn label_padding(mut self, chars: f64) -> Self {
        self.padding.label = chars;
        self
    }

    pub fn value_padding(mut self, chars: f64) -> Self {
        self.padding.value = chars;
        self
    }

    pub fn template(mut self, template: impl Into<TemplateSource>) -> Self {
        self.template = template.into();
        self
    }

    pub fn style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.value_prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = suffix.into();
        self
    }

    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn use_max_when_value_exceeds(mut self, use_max: bool) -> Self {
        self.use_max_when_value_exceeds = use_max;
        self
    }

    pub fn value_format(mut self, format: impl Into<String>) -> Self {
        self.value_format = Some(format.into());
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    pub fn semver(mut self, semver: bool) -> Self {
        self.semver = semver;
        self
    }

    pub fn width_model(mut self, model: WidthModel) -> Self {
        self.width_model = model;
        self
    }
}

/// A fully computed, immutable badge.
#[derive(Debug, Clone)]
pub struct Badge {
    options: BadgeOptions,
    font: Font,
    value: ClassifiedValue,
    value_text: String,
    color: String,
    label_text_color: String,
    value_text_color: String,
    layout: Layout,
    template: String,
    mask_id: String,
}

impl Badge {
    /// Build a badge, drawing its mask id from the process-wide sequence.
    pub fn new(options: BadgeOptions) -> Result<Self> {
        Self::with_sequence(options, IdSequence::process())
    }

    /// Build a badge, drawing its mask id from `sequence`.
    ///
    /// All validation happens here; a badge that builds always renders.
    pub fn with_sequence(options: BadgeOptions, sequence: &IdSequence) -> Result<Self> {
        if options.label.is_empty() && options.value.is_empty() {
            return Err(BadgeError::EmptyBadge);
        }

        let font = Font::resolve(&options.font_name, options.font_size)?;
        options.padding.validate()?;
        let value = classify(&options.value, options.semver)?;

        let formatted = match &options.value_format {
            Some(fmt) => format::apply(fmt, &value)?,
            None => value.to_string(),
        };
        let value_text = format!("{}{formatted}{}", options.value_prefix, options.value_suffix);

        let color_spec = resolve_color(
            &value,
            &options.thresholds,
            &options.default_color,
            options.use_max_when_value_exceeds,
        )?;
        let color = color::resolve(&color_spec)?;

        let (label_text_spec, value_text_spec) = options
            .text_color
            .split_once(',')
            .unwrap_or((options.text_color.as_str(), options.text_color.as_str()));
        let label_text_color = color::resolve(label_text_spec)?;
        let value_text_color = color::resolve(value_text_spec)?;

        let layout = Layout::compute(
            &options.label,
            &value_text,
            font.average_width(),
            options.padding,
            options.width_model,
        );
        let template = template::load(&options.template, options.style)?;
        let mask_id = sequence.next_mask_id();

        debug!(
            label = %options.label,
            value = %value_text,
            color = %color,
            width = layout.badge_width,
            mask_id = %mask_id,
            "built badge"
        );

        Ok(Self {
            options,
            font,
            value,
            value_text,
            color,
            label_text_color,
            value_text_color,
            layout,
            template,
            mask_id,
        })
    }

    pub fn options(&self) -> &BadgeOptions {
        &self.options
    }

    pub fn label(&self) -> &str {
        &self.options.label
    }

    pub fn value(&self) -> &ClassifiedValue {
        &self.value
    }

    /// Prefix, formatted value and suffix as displayed.
    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Resolved hex color of the value region.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn label_text_color(&self) -> &str {
        &self.label_text_color
    }

    pub fn value_text_color(&self) -> &str {
        &self.value_text_color
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn mask_id(&self) -> &str {
        &self.mask_id
    }

    /// Rendered SVG markup.
    pub fn svg(&self) -> String {
        render(&self.template, &self.fields())
    }

    fn fields(&self) -> Fields<'_> {
        Fields {
            layout: self.layout,
            font_name: self.font.name(),
            font_size: self.font.size(),
            label: &self.options.label,
            value_text: &self.value_text,
            color: &self.color,
            label_text_color: &self.label_text_color,
            value_text_color: &self.value_text_color,
            mask_id: &self.mask_id,
        }
    }

    /// Write the SVG to `path`, returning the path actually written.
    ///
    /// `.svg` is appended unless the path already ends with it. An existing
    /// file is only replaced when `overwrite` is set.
    pub fn write(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        let target = output_path(path.as_ref())?;
        if !overwrite && target.exists() {
            return Err(BadgeError::FileExists(target));
        }
        debug!(path = %target.display(), overwrite, "writing badge");
        std::fs::write(&target, self.svg())?;
        Ok(target)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.svg())
    }
}

/// Final output location for `path`: never a directory, always `.svg`.
pub fn output_path(path: &Path) -> Result<PathBuf> {
    let text = path.as_os_str().to_string_lossy();
    if text.is_empty() || text.ends_with(std::path::MAIN_SEPARATOR) || text.ends_with('/') {
        return Err(BadgeError::TargetIsDirectory(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(BadgeError::TargetIsDirectory(path.to_path_buf()));
    }

    let has_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SVG_EXTENSION));
    if has_svg {
        return Ok(path.to_path_buf());
    }

    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(SVG_EXTENSION);
    let target = PathBuf::from(name);
    if target.is_dir() {
        return Err(BadgeError::TargetIsDirectory(target));
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn build(options: BadgeOptions) -> Badge {
        Badge::with_sequence(options, &IdSequence::new()).unwrap()
    }

    #[test]
    fn pylint_five_dimensions() {
        let badge = build(BadgeOptions::new("pylint", "5"));
        assert_eq!(badge.layout().badge_width, 61);
        assert_eq!(badge.layout().arc_start, 51);
        assert_eq!(badge.font().average_width(), 10);
    }

    #[test]
    fn both_empty_is_configuration_error() {
        let err = Badge::with_sequence(BadgeOptions::new("", ""), &IdSequence::new()).unwrap_err();
        assert!(matches!(err, BadgeError::EmptyBadge));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn prefix_suffix_and_format_compose_value_text() {
        let badge = build(
            BadgeOptions::new("speed", "123.456")
                .prefix("~")
                .suffix(" m/s")
                .value_format("%.1f"),
        );
        assert_eq!(badge.value_text(), "~123.5 m/s");
    }

    #[test]
    fn unformatted_numbers_are_normalized() {
        assert_eq!(build(BadgeOptions::new("x", "2.50")).value_text(), "2.5");
        assert_eq!(build(BadgeOptions::new("x", "007")).value_text(), "7");
    }

    #[test]
    fn text_color_pair_splits() {
        let badge = build(BadgeOptions::new("test", "2.22").text_color("#010101,#101010"));
        assert_eq!(badge.label_text_color(), "#010101");
        assert_eq!(badge.value_text_color(), "#101010");

        let badge = build(BadgeOptions::new("test", "2.22").text_color("white"));
        assert_eq!(badge.label_text_color(), "#FFFFFF");
        assert_eq!(badge.value_text_color(), "#FFFFFF");
    }

    #[test]
    fn invalid_threshold_color_fails_at_construction() {
        let thresholds = Thresholds::from_pairs(["2=red", "8=brightgreen"]).unwrap();
        let err = Badge::with_sequence(
            BadgeOptions::new("test", "2.22").thresholds(thresholds),
            &IdSequence::new(),
        )
        .unwrap_err();
        assert!(matches!(err, BadgeError::InvalidColor { .. }));
    }

    #[test]
    fn mask_ids_follow_the_sequence() {
        let seq = IdSequence::new();
        let a = Badge::with_sequence(BadgeOptions::new("a", "1"), &seq).unwrap();
        let b = Badge::with_sequence(BadgeOptions::new("a", "1"), &seq).unwrap();
        assert_eq!(a.mask_id(), "anybadge_1");
        assert_eq!(b.mask_id(), "anybadge_2");
    }

    #[test]
    fn display_matches_svg() {
        let badge = build(BadgeOptions::new("label", "value"));
        assert_eq!(badge.to_string(), badge.svg());
    }

    #[test]
    fn output_path_appends_extension() {
        assert_eq!(
            output_path(Path::new("badge")).unwrap(),
            PathBuf::from("badge.svg")
        );
        assert_eq!(
            output_path(Path::new("badge.SVG")).unwrap(),
            PathBuf::from("badge.SVG")
        );
        assert_eq!(
            output_path(Path::new("v1.2")).unwrap(),
            PathBuf::from("v1.2.svg")
        );
    }

    #[test]
    fn output_path_rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            output_path(dir.path()),
            Err(BadgeError::TargetIsDirectory(_))
        ));
        assert!(matches!(
            output_path(Path::new("out/")),
            Err(BadgeError::TargetIsDirectory(_))
        ));
    }
}
