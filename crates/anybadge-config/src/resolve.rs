//! Merge CLI flags, config file and built-in defaults into badge options.

use anybadge_core::{BadgeOptions, BadgeStyle, Padding, Thresholds, WidthModel, preset};
use tracing::debug;

use crate::Cli;
use crate::error::ConfigError;
use crate::file::UserConfig;

/// A style selected by name: thresholds plus optional label/prefix/suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub name: String,
    pub thresholds: Thresholds,
    pub label: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Find a style by name, ignoring case.
///
/// User styles shadow the built-in presets.
pub fn find_style(
    name: &str,
    config: Option<&UserConfig>,
) -> Result<Option<ResolvedStyle>, ConfigError> {
    let user = config.and_then(|c| {
        c.styles
            .iter()
            .find(|(style_name, _)| style_name.eq_ignore_ascii_case(name))
    });
    if let Some((style_name, style)) = user {
        return Ok(Some(ResolvedStyle {
            name: style_name.clone(),
            thresholds: style.thresholds.to_thresholds()?,
            label: style.label.clone(),
            prefix: style.prefix.clone(),
            suffix: style.suffix.clone(),
        }));
    }

    let Some(builtin) = preset(name) else {
        return Ok(None);
    };
    Ok(Some(ResolvedStyle {
        name: builtin.name.to_string(),
        thresholds: builtin.thresholds()?,
        label: Some(builtin.label.to_string()),
        prefix: None,
        suffix: builtin.suffix.map(str::to_string),
    }))
}

/// Build badge options from the command line and optional config file.
///
/// A single trailing argument naming a style supplies its thresholds, and
/// fills in label, prefix and suffix only when those flags were not given.
pub fn resolve_badge(cli: &Cli, config: Option<&UserConfig>) -> Result<BadgeOptions, ConfigError> {
    let defaults = config.map(|c| c.defaults.clone()).unwrap_or_default();

    let style = match cli.args.as_slice() {
        [single] => find_style(single, config)?,
        _ => None,
    };
    let thresholds = match &style {
        Some(style) => {
            debug!(style = %style.name, "using named style");
            style.thresholds.clone()
        }
        None => Thresholds::from_pairs(&cli.args)?,
    };

    let label = cli
        .label
        .clone()
        .or_else(|| style.as_ref().and_then(|s| s.label.clone()))
        .unwrap_or_default();
    let prefix = cli
        .prefix
        .clone()
        .or_else(|| style.as_ref().and_then(|s| s.prefix.clone()))
        .unwrap_or_default();
    let suffix = cli
        .suffix
        .clone()
        .or_else(|| style.as_ref().and_then(|s| s.suffix.clone()))
        .unwrap_or_default();

    let padding = cli
        .padding
        .or(defaults.padding)
        .unwrap_or(Padding::DEFAULT_CHARS);
    let padding = Padding {
        label: cli
            .label_padding
            .or(defaults.label_padding)
            .unwrap_or(padding),
        value: cli
            .value_padding
            .or(defaults.value_padding)
            .unwrap_or(padding),
    };

    let base = BadgeOptions::default();
    let mut options = BadgeOptions {
        label,
        value: cli.value.clone().unwrap_or_default(),
        font_name: cli.font.clone().or(defaults.font).unwrap_or(base.font_name),
        font_size: cli.font_size.or(defaults.font_size).unwrap_or(base.font_size),
        padding,
        style: cli
            .style
            .as_deref()
            .or(defaults.style.as_deref())
            .and_then(|s| s.parse::<BadgeStyle>().ok())
            .unwrap_or_default(),
        value_prefix: prefix,
        value_suffix: suffix,
        thresholds,
        default_color: cli.color.clone().or(defaults.color).unwrap_or(base.default_color),
        use_max_when_value_exceeds: cli.use_max || defaults.use_max.unwrap_or(false),
        value_format: cli.value_format.clone(),
        text_color: cli
            .text_color
            .clone()
            .or(defaults.text_color)
            .unwrap_or(base.text_color),
        semver: cli.semver,
        width_model: cli
            .width_model
            .or(defaults.width_model)
            .map(WidthModel::from)
            .unwrap_or_default(),
        ..base
    };
    if let Some(template) = cli.template.clone().or(defaults.template) {
        options = options.template(template);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("anybadge").chain(args.iter().copied()))
    }

    #[test]
    fn bare_cli_matches_library_defaults_except_use_max() {
        let options = resolve_badge(&cli(&["-l", "a", "-v", "b"]), None).unwrap();
        let expected = BadgeOptions::new("a", "b").use_max_when_value_exceeds(false);
        assert_eq!(options, expected);
    }

    #[test]
    fn preset_fills_label_and_suffix() {
        let options = resolve_badge(&cli(&["-v", "65", "coverage"]), None).unwrap();
        assert_eq!(options.label, "coverage");
        assert_eq!(options.value_suffix, "%");
        assert_eq!(options.thresholds.len(), 4);
    }

    #[test]
    fn explicit_flags_beat_preset() {
        let options =
            resolve_badge(&cli(&["-l", "cov", "-s", " pct", "-v", "65", "COVERAGE"]), None).unwrap();
        assert_eq!(options.label, "cov");
        assert_eq!(options.value_suffix, " pct");
    }

    #[test]
    fn unknown_single_word_is_malformed_threshold() {
        let err = resolve_badge(&cli(&["-v", "1", "lint"]), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Badge(anybadge_core::BadgeError::MalformedThreshold(_))
        ));
    }

    #[test]
    fn config_defaults_fill_missing_flags() {
        let config = UserConfig::parse(
            r#"
[defaults]
color = "blue"
padding = 1.0
value_padding = 2.0
use_max = true
style = "gitlab-scoped"
width_model = "pictographic"
"#,
        )
        .unwrap();
        let options = resolve_badge(&cli(&["-v", "1", "-c", "red"]), Some(&config)).unwrap();
        assert_eq!(options.default_color, "red");
        assert_eq!(options.padding, Padding { label: 1.0, value: 2.0 });
        assert!(options.use_max_when_value_exceeds);
        assert_eq!(options.style, BadgeStyle::GitlabScoped);
        assert_eq!(options.width_model, WidthModel::Pictographic);
    }

    #[test]
    fn user_style_shadows_builtin() {
        let config = UserConfig::parse(
            r#"
[styles.pylint]
label = "lint score"
thresholds = ["5=red", "10=green"]
"#,
        )
        .unwrap();
        let options = resolve_badge(&cli(&["-v", "7", "pylint"]), Some(&config)).unwrap();
        assert_eq!(options.label, "lint score");
        assert_eq!(options.thresholds.len(), 2);
    }

    #[test]
    fn template_flag_becomes_template_source() {
        let options = resolve_badge(&cli(&["-v", "1", "-t", "gitlab_scoped"]), None).unwrap();
        assert_eq!(
            options.template,
            anybadge_core::TemplateSource::Text("gitlab_scoped".into())
        );
    }
}
