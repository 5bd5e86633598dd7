//! Dashboard configuration from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8501;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings of the dashboard server.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Directory holding `synthea/`, `omop/` and pipeline reports.
    pub data_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    /// Static files served under `/assets`.
    pub assets_dir: PathBuf,
    /// Logo file name inside `assets_dir`.
    pub logo: String,
    /// `None` keeps the snapshot until an explicit reload.
    pub cache_ttl: Option<Duration>,
    pub region: String,
    pub specialty: String,
    /// Origins allowed cross-origin access; empty allows any origin to `GET`.
    pub cors_origins: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from("assets"),
            logo: "logo.svg".to_string(),
            cache_ttl: None,
            region: "Galicia".to_string(),
            specialty: "Gastroenterology".to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from any variable lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = match var("DASHBOARD_HOST") {
            Some(value) => value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    name: "DASHBOARD_HOST",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.host,
        };

        let port = match var("PORT") {
            Some(value) => value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    name: "PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        let cache_ttl = match var("DASHBOARD_CACHE_TTL_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidValue {
                        name: "DASHBOARD_CACHE_TTL_SECS",
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Some(Duration::from_secs(secs))
            }
            None => defaults.cache_ttl,
        };

        Ok(Self {
            data_dir: var("DASHBOARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            host,
            port,
            assets_dir: var("DASHBOARD_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            logo: var("DASHBOARD_LOGO").unwrap_or(defaults.logo),
            cache_ttl,
            region: var("DASHBOARD_REGION").unwrap_or(defaults.region),
            specialty: var("DASHBOARD_SPECIALTY").unwrap_or(defaults.specialty),
            cors_origins: var("DASHBOARD_CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Logo path on disk, if the file exists.
    pub fn logo_path(&self) -> Option<PathBuf> {
        let path = self.assets_dir.join(&self.logo);
        path.is_file().then_some(path)
    }
}
