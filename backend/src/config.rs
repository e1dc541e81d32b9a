use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_dir: PathBuf,
    /// `["*"]` allows any origin.
    pub cors_allow_origins: Vec<String>,
    pub include_baseline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            storage_dir: PathBuf::from("./data"),
            cors_allow_origins: vec!["*".to_string()],
            include_baseline: true,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("APP_HOST").unwrap_or(defaults.host);

        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid APP_PORT value: {}", raw))?,
            None => defaults.port,
        };

        let storage_dir = lookup("WORKDAY_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_dir);

        let cors_allow_origins = match lookup("CORS_ALLOW_ORIGINS") {
            Some(raw) => {
                let origins: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect();
                if origins.is_empty() {
                    return Err(anyhow!("CORS_ALLOW_ORIGINS must list at least one origin"));
                }
                origins
            }
            None => defaults.cors_allow_origins,
        };

        let include_baseline = match lookup("WORKDAY_INCLUDE_BASELINE") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow!("Invalid WORKDAY_INCLUDE_BASELINE value: {}", raw))?,
            None => defaults.include_baseline,
        };

        Ok(Config {
            host,
            port,
            storage_dir,
            cors_allow_origins,
            include_baseline,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage_dir, PathBuf::from("./data"));
        assert!(config.allows_any_origin());
        assert!(config.include_baseline);
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "CORS_ALLOW_ORIGINS",
            "http://localhost:5173, https://calendar.example.com",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allow_origins,
            vec!["http://localhost:5173", "https://calendar.example.com"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(config_from(&[("APP_PORT", "eighty")]).is_err());
        assert!(config_from(&[("WORKDAY_INCLUDE_BASELINE", "maybe")]).is_err());
        assert!(config_from(&[("CORS_ALLOW_ORIGINS", " , ")]).is_err());
    }

    #[test]
    fn baseline_can_be_disabled() {
        let config = config_from(&[("WORKDAY_INCLUDE_BASELINE", "false")]).unwrap();
        assert!(!config.include_baseline);
    }
}
