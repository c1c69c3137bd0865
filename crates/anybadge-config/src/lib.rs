//! # anybadge-config
//!
//! **Tier 1 (Configuration)**
//!
//! This crate defines the CLI arguments for both binaries, the optional
//! TOML configuration file, and the merge of the two into badge options.
//!
//! ## What belongs here
//! * Clap `Parser` structs
//! * Configuration file struct definitions (Serde)
//! * Precedence rules (CLI flag > config file > built-in default)
//! * Server settings from flags and environment
//! * Log filter defaults for the binaries
//!
//! ## What does NOT belong here
//! * Badge rendering
//! * Network I/O

mod error;
mod file;
mod logging;
mod resolve;
mod server;

use std::path::PathBuf;

use anybadge_core::WidthModel;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use file::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOCAL_CONFIG_FILE, Defaults, StyleConfig, ThresholdSpec,
    UserConfig, discover,
};
pub use logging::{env_filter, init_tracing};
pub use resolve::{ResolvedStyle, find_style, resolve_badge};
pub use server::{
    DEFAULT_LISTEN_ADDRESS, DEFAULT_LOG_LEVEL, DEFAULT_PORT, ENV_LISTEN_ADDRESS, ENV_LOG_LEVEL,
    ENV_PORT, ServerSettings,
};

/// Command line utility to generate .svg badges.
///
/// Values can be passed as string, integer or floating point; the type is
/// detected automatically. Without `--file` the markup is written to stdout.
///
/// Trailing arguments are `<upper>=<color>` threshold pairs, read as "less
/// than 2 is red, less than 4 is orange", or a single style name such as
/// `pylint` or `coverage`.
#[derive(Parser, Debug, Clone)]
#[command(name = "anybadge", about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// The badge label.
    #[arg(short = 'l', long)]
    pub label: Option<String>,

    /// The badge value.
    #[arg(short = 'v', long, allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Formatting string for the value (e.g. "%.2f" for 2dp floats).
    #[arg(short = 'm', long, value_name = "FORMAT")]
    pub value_format: Option<String>,

    /// Badge color for fixed color badges, and the fallback for thresholds.
    #[arg(short = 'c', long)]
    pub color: Option<String>,

    /// Optional prefix for the value.
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Optional suffix for the value.
    #[arg(short = 's', long)]
    pub suffix: Option<String>,

    /// Number of characters to pad on either side of the badge text.
    #[arg(short = 'd', long, value_name = "CHARS")]
    pub padding: Option<f64>,

    /// Number of characters to pad on either side of the label.
    #[arg(long, value_name = "CHARS")]
    pub label_padding: Option<f64>,

    /// Number of characters to pad on either side of the value.
    #[arg(long, value_name = "CHARS")]
    pub value_padding: Option<f64>,

    /// Font name.
    #[arg(short = 'n', long)]
    pub font: Option<String>,

    /// Font size.
    #[arg(short = 'z', long)]
    pub font_size: Option<u32>,

    /// Template: a built-in name, a path to an .svg file, or literal markup.
    #[arg(short = 't', long)]
    pub template: Option<String>,

    /// Badge style ("default" or "gitlab-scoped"). Overrides --template.
    #[arg(long)]
    pub style: Option<String>,

    /// Use the maximum threshold color when the value exceeds the maximum threshold.
    #[arg(short = 'u', long)]
    pub use_max: bool,

    /// Output file location.
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Text color. A single color affects label and value; a comma
    /// separated pair sets label and value text respectively.
    #[arg(short = 'r', long)]
    pub text_color: Option<String>,

    /// Treat value and thresholds as semantic versions.
    #[arg(short = 'e', long)]
    pub semver: bool,

    /// How characters outside the width table are measured.
    #[arg(long, value_enum)]
    pub width_model: Option<WidthModelChoice>,

    /// Configuration file (default: ./anybadge.toml, then the user config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Print the version number and exit.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Threshold pairs `<upper>=<color>`, or a single style name.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Run an anybadge server.
#[derive(Parser, Debug, Clone)]
#[command(name = "anybadge-server", version, about, long_about = None)]
pub struct ServerCli {
    /// Server port number [env: ANYBADGE_PORT] [default: 8000]
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Server listen address [env: ANYBADGE_LISTEN_ADDRESS] [default: localhost]
    #[arg(short = 'l', long)]
    pub listen_address: Option<String>,

    /// Enable debug logging.
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// Width model as spelled on the command line and in config files.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthModelChoice {
    /// Unknown characters count as a full glyph.
    #[default]
    Standard,
    /// Emoji and other pictographs are measured narrower.
    Pictographic,
}

impl From<WidthModelChoice> for WidthModel {
    fn from(choice: WidthModelChoice) -> Self {
        match choice {
            WidthModelChoice::Standard => WidthModel::Standard,
            WidthModelChoice::Pictographic => WidthModel::Pictographic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
        ServerCli::command().debug_assert();
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::parse_from([
            "anybadge", "-l", "pylint", "-v", "2.22", "-f", "out.svg", "-o", "-u", "-e",
        ]);
        assert_eq!(cli.label.as_deref(), Some("pylint"));
        assert_eq!(cli.value.as_deref(), Some("2.22"));
        assert_eq!(cli.file, Some(PathBuf::from("out.svg")));
        assert!(cli.overwrite && cli.use_max && cli.semver);
    }

    #[test]
    fn trailing_pairs_are_collected() {
        let cli = Cli::parse_from(["anybadge", "--value=3", "2=red", "4=orange", "-1=blue"]);
        assert_eq!(cli.args, vec!["2=red", "4=orange", "-1=blue"]);
    }

    #[test]
    fn negative_value_is_accepted() {
        let cli = Cli::parse_from(["anybadge", "-v", "-3", "pylint"]);
        assert_eq!(cli.value.as_deref(), Some("-3"));
        assert_eq!(cli.args, vec!["pylint"]);
    }

    #[test]
    fn version_is_a_plain_flag() {
        assert!(Cli::parse_from(["anybadge", "-V"]).version);
        assert!(Cli::parse_from(["anybadge", "--version"]).version);
        assert!(!Cli::parse_from(["anybadge", "-v", "1"]).version);
    }

    #[test]
    fn width_model_choice_maps_to_core() {
        let cli = Cli::parse_from(["anybadge", "--width-model", "pictographic"]);
        assert_eq!(
            cli.width_model.map(WidthModel::from),
            Some(WidthModel::Pictographic)
        );
    }

    #[test]
    fn server_flags_parse() {
        let cli = ServerCli::parse_from(["anybadge-server", "-p", "9000", "-l", "0.0.0.0", "-d"]);
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.listen_address.as_deref(), Some("0.0.0.0"));
        assert!(cli.debug);
    }
}
