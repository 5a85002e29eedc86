//! Runtime configuration.
//!
//! Settings come from built-in defaults, an optional TOML file and
//! `FREIGHT_PRICING__*` environment variables, in increasing order of
//! precedence.  Nested keys use `__` as separator, e.g.
//! `FREIGHT_PRICING__SERVER__PORT=8080`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// `text` or `json`.
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    pub enabled: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig { enabled: true }
    }
}

/// Load configuration from `pricing.toml` (optional) and
/// `FREIGHT_PRICING__*` environment variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from("pricing")
}

/// Load configuration using `file` (without extension) as the optional
/// config file, then validate it.
pub fn load_config_from(file: &str) -> anyhow::Result<AppConfig> {
    let defaults = ServerConfig::default();
    let config = config::Config::builder()
        .set_default("server.host", defaults.host)?
        .set_default("server.port", i64::from(defaults.port))?
        .set_default("server.log_level", defaults.log_level)?
        .set_default("server.log_format", defaults.log_format)?
        .set_default("notify.enabled", NotifyConfig::default().enabled)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(config::Environment::with_prefix("FREIGHT_PRICING").separator("__"))
        .build()?;

    let cfg: AppConfig = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Reject settings that would only fail later at startup.  The host
/// may be an IP address or a host name; it is resolved when binding.
pub fn validate_config(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.host.trim().is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Unknown log format '{}', expected 'text' or 'json'", other),
    }

    Ok(())
}
