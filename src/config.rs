use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{Result, UserDeckError};

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const ENDPOINT_ENV: &str = "USERDECK_ENDPOINT";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub bind: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| UserDeckError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| UserDeckError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdeck")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserDeckError::NoConfigDir)
    }

    /// Resolve the users endpoint: explicit flag, then env var, then config file.
    pub fn endpoint(&self, explicit: Option<&str>) -> Result<Url> {
        let from_env = std::env::var(ENDPOINT_ENV).ok();
        self.resolve_endpoint(explicit, from_env.as_deref())
    }

    fn resolve_endpoint(&self, explicit: Option<&str>, from_env: Option<&str>) -> Result<Url> {
        let raw = explicit
            .or(from_env)
            .or(self.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);

        let url = Url::parse(raw).map_err(|_| UserDeckError::InvalidUrl(raw.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(UserDeckError::InvalidUrl(raw.to_string())),
        }
    }

    /// Request timeout. `None` means the request may wait forever.
    pub fn timeout(&self, explicit: Option<u64>) -> Option<Duration> {
        explicit
            .or(self.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn bind(&self, explicit: Option<&str>) -> Result<SocketAddr> {
        let raw = explicit.or(self.bind.as_deref()).unwrap_or(DEFAULT_BIND);
        raw.parse()
            .map_err(|_| UserDeckError::InvalidBind(raw.to_string()))
    }
}
