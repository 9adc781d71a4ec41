use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::theme::Theme;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Reject requests without an identity header
    #[arg(long, env = "IDENTITY_REQUIRED")]
    pub identity_required: Option<bool>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,

    /// Template catalog file (YAML)
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub resilience: ResilienceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    /// Reject requests that carry no identity header.
    pub identity_required: bool,
    /// Header holding the gateway's base64url JSON claims.
    pub identity_header: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub timeout_disabled: bool,
    pub timeout_secs: u64,
    pub requests_per_second: f32,
    pub burst_size: f32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// YAML catalog; the built-in templates are used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag > CLI env var > `PLACARD_*` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("security.identity_required", false)?
            .set_default("security.identity_header", "x-identity-claims")?
            .set_default("resilience.rate_limit_enabled", true)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.timeout_secs", 30)?
            .set_default("resilience.requests_per_second", 20.0)?
            .set_default("resilience.burst_size", 40.0)?;

        // Explicit file must exist, the working-directory one is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path).required(true));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
        }

        // E.g. PLACARD_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("PLACARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // clap already folded its env vars into `cli`, so these cover both
        // flags and their variables.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(required) = cli.identity_required {
            builder = builder.set_override("security.identity_required", required)?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }
        if let Some(path) = cli.catalog {
            builder = builder.set_override("catalog.path", path)?;
        }

        builder.build()?.try_deserialize()
    }
}
