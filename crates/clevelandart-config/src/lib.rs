// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clevelandart::DEFAULT_BASE_URL;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Whole-request timeout in seconds; `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(30),
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: CLEVELANDART_).
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("CLEVELANDART_").split("__"));

    let config: AppConfig = figment.extract()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
            assert_eq!(
                DEFAULT_BASE_URL,
                "https://openaccess-api.clevelandart.org/api"
            );
            assert_eq!(config.api.timeout(), Some(Duration::from_secs(30)));
            assert_eq!(config.telemetry.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "clevelandart.toml",
                r#"
                    [api]
                    base_url = "http://localhost:9000/api"
                    timeout_secs = 5

                    [telemetry]
                    log_level = "debug"
                "#,
            )?;

            let config = load(Some(Path::new("clevelandart.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.api.base_url, "http://localhost:9000/api");
            assert_eq!(config.api.timeout(), Some(Duration::from_secs(5)));
            assert_eq!(config.telemetry.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "clevelandart.toml",
                r#"
                    [api]
                    base_url = "http://from-file/api"
                "#,
            )?;
            jail.set_env("CLEVELANDART_API__BASE_URL", "http://from-env/api");
            jail.set_env("CLEVELANDART_API__USER_AGENT", "museum-bot/1.0");

            let config = load(Some(Path::new("clevelandart.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.api.base_url, "http://from-env/api");
            assert_eq!(config.api.user_agent.as_deref(), Some("museum-bot/1.0"));
            Ok(())
        });
    }
}
