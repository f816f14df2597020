//! Handles settings for the application.
//!
//! Sources, lowest priority first: built-in defaults, the TOML file
//! (`config/finance_tracker.toml` unless `--config` says otherwise),
//! `FINANCE_TRACKER__<SECTION>__<KEY>` environment variables, CLI flags.
use clap::Parser;
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/finance_tracker.toml";
const ENV_PREFIX: &str = "FINANCE_TRACKER";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level applied to the workspace crates.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Ledger {
    /// Boot with the default seed instead of an empty ledger.
    pub seed: bool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub ledger: Ledger,
}

#[derive(Debug, Default, Parser)]
#[command(name = "finance_tracker", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override bind address.
    #[arg(long)]
    bind: Option<String>,
    /// Override port.
    #[arg(long)]
    port: Option<u16>,
    /// Override log level (e.g. debug, info, warn).
    #[arg(long)]
    level: Option<String>,
}

pub fn load() -> Result<Settings> {
    let args = Args::parse();
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let builder = Config::builder()
        .add_source(File::with_name(config_path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );
    resolve(builder, args)
}

fn resolve(builder: ConfigBuilder<DefaultState>, args: Args) -> Result<Settings> {
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(bind) = args.bind {
        settings.server.bind = bind;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(level) = args.level {
        settings.app.level = level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(toml, FileFormat::Toml))
    }

    #[test]
    fn defaults_without_any_source() {
        let settings = resolve(Config::builder(), Args::default()).unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.server.port, 5000);
        assert!(settings.ledger.seed);
    }

    #[test]
    fn file_values_fill_missing_keys_with_defaults() {
        let settings = resolve(
            from_toml("[server]\nport = 8080\n\n[ledger]\nseed = false\n"),
            Args::default(),
        )
        .unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert!(!settings.ledger.seed);
        assert_eq!(settings.app.level, "info");
    }

    #[test]
    fn cli_flags_override_file() {
        let args = Args::try_parse_from([
            "finance_tracker",
            "--port",
            "9000",
            "--bind",
            "0.0.0.0",
            "--level",
            "debug",
        ])
        .unwrap();
        let settings = resolve(from_toml("[server]\nport = 8080\n"), args).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.app.level, "debug");
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let result = resolve(from_toml("[server]\nport = \"not a port\"\n"), Args::default());
        assert!(result.is_err());
    }
}
