//! Server settings.

use tracing::debug;

use crate::ServerCli;
use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LISTEN_ADDRESS: &str = "localhost";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_PORT: &str = "ANYBADGE_PORT";
pub const ENV_LISTEN_ADDRESS: &str = "ANYBADGE_LISTEN_ADDRESS";
pub const ENV_LOG_LEVEL: &str = "ANYBADGE_LOG_LEVEL";

/// Effective server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub listen_address: String,
    pub port: u16,
    /// Default log filter directive, used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerSettings {
    /// Settings from flags and the process environment.
    pub fn from_env(cli: &ServerCli) -> Result<Self, ConfigError> {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    /// Settings from flags, falling back to `env` and then the defaults.
    pub fn resolve(
        cli: &ServerCli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match cli.port {
            Some(port) => port,
            None => match env(ENV_PORT) {
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_PORT,
                    value: raw.clone(),
                })?,
                None => DEFAULT_PORT,
            },
        };

        let listen_address = cli
            .listen_address
            .clone()
            .or_else(|| env(ENV_LISTEN_ADDRESS))
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string());

        let log_level = if cli.debug {
            "debug".to_string()
        } else {
            env(ENV_LOG_LEVEL)
                .map(|level| log_directive(&level))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
        };

        let settings = Self {
            listen_address,
            port,
            log_level,
        };
        debug!(?settings, "resolved server settings");
        Ok(settings)
    }
}

/// Map a level name to a tracing filter directive, accepting the
/// `WARNING`/`CRITICAL` spellings as well.
fn log_directive(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    match level.as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        _ => level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn cli(args: &[&str]) -> ServerCli {
        ServerCli::parse_from(std::iter::once("anybadge-server").chain(args.iter().copied()))
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let settings = ServerSettings::resolve(&cli(&[]), env(&[])).unwrap();
        assert_eq!(settings, ServerSettings::default());
    }

    #[test]
    fn env_overrides_defaults() {
        let settings = ServerSettings::resolve(
            &cli(&[]),
            env(&[
                (ENV_PORT, "9001"),
                (ENV_LISTEN_ADDRESS, "0.0.0.0"),
                (ENV_LOG_LEVEL, "WARNING"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.port, 9001);
        assert_eq!(settings.listen_address, "0.0.0.0");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn flags_override_env() {
        let settings = ServerSettings::resolve(
            &cli(&["-p", "7000", "-l", "127.0.0.1", "-d"]),
            env(&[(ENV_PORT, "9001"), (ENV_LISTEN_ADDRESS, "0.0.0.0"), (ENV_LOG_LEVEL, "error")]),
        )
        .unwrap();
        assert_eq!(settings.port, 7000);
        assert_eq!(settings.listen_address, "127.0.0.1");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn invalid_port_env_is_an_error() {
        let err = ServerSettings::resolve(&cli(&[]), env(&[(ENV_PORT, "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: ENV_PORT, .. }));
    }
}
