// src/config.rs
//! Configuration: defaults, then the environment's section of `config.yaml`,
//! then environment variables

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;
use tracing::info;

const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FORM_LIMIT_KIB: u64 = 2048;
const DEFAULT_SESSION_IDLE_MINUTES: u64 = 60;
const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigManager {
    pub environment: String,
    pub backend: BackendConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub linkedin_dedicated_endpoint: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Largest accepted form body; pasted postings can be long
    pub form_limit_kib: u64,
    pub session_idle_minutes: u64,
    pub max_sessions: usize,
    /// Key for the private session cookie. Required in production, where
    /// rocket refuses to launch without one.
    pub secret_key: Option<String>,
}

/// One environment section of `config.yaml`; everything optional
#[derive(Debug, Clone, Default, Deserialize)]
struct FileSection {
    backend_url: Option<String>,
    backend_timeout_secs: Option<u64>,
    linkedin_dedicated_endpoint: Option<bool>,
    address: Option<IpAddr>,
    port: Option<u16>,
    form_limit_kib: Option<u64>,
    session_idle_minutes: Option<u64>,
    max_sessions: Option<usize>,
    secret_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

impl ConfigManager {
    /// Load configuration from the working directory and process environment
    pub fn load() -> Result<Self> {
        let file = Path::new(CONFIG_FILE);
        let yaml = if file.exists() {
            Some(std::fs::read_to_string(file).context("Failed to read config.yaml")?)
        } else {
            None
        };

        let config = Self::from_sources(yaml.as_deref(), |key| std::env::var(key).ok())?;
        info!(
            "Loaded configuration for environment {} (backend: {})",
            config.environment, config.backend.url
        );
        Ok(config)
    }

    /// Resolve configuration from an optional YAML document and a variable lookup
    pub fn from_sources<F>(yaml: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("JOBGUARDIAN_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());

        let section = match yaml {
            Some(content) => {
                let file: ConfigFile =
                    serde_yaml::from_str(content).context("Failed to parse config.yaml")?;
                match environment.as_str() {
                    "production" => file.production,
                    _ => file.local,
                }
            }
            None => FileSection::default(),
        };

        let url = lookup("BACKEND_URL")
            .or(section.backend_url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let timeout_seconds = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("BACKEND_TIMEOUT_SECS must be a number of seconds"))?,
            None => section.backend_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let linkedin_dedicated_endpoint = match lookup("LINKEDIN_DEDICATED_ENDPOINT") {
            Some(raw) => parse_flag(&raw)
                .context("LINKEDIN_DEDICATED_ENDPOINT must be true or false")?,
            None => section.linkedin_dedicated_endpoint.unwrap_or(false),
        };

        let address = match lookup("ROCKET_ADDRESS") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| anyhow::anyhow!("ROCKET_ADDRESS must be a valid IP address"))?,
            None => match section.address {
                Some(address) => address,
                None => DEFAULT_ADDRESS
                    .parse()
                    .context("Invalid default address")?,
            },
        };

        let port = match lookup("ROCKET_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?,
            None => section.port.unwrap_or(DEFAULT_PORT),
        };

        let form_limit_kib = match lookup("FORM_LIMIT_KIB") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("FORM_LIMIT_KIB must be a number of KiB"))?,
            None => section.form_limit_kib.unwrap_or(DEFAULT_FORM_LIMIT_KIB),
        };

        let session_idle_minutes = match lookup("SESSION_IDLE_MINUTES") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("SESSION_IDLE_MINUTES must be a number of minutes"))?,
            None => section
                .session_idle_minutes
                .unwrap_or(DEFAULT_SESSION_IDLE_MINUTES),
        };

        let max_sessions = match lookup("MAX_SESSIONS") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("MAX_SESSIONS must be a positive number"))?,
            None => section.max_sessions.unwrap_or(DEFAULT_MAX_SESSIONS),
        };
        if max_sessions == 0 {
            anyhow::bail!("MAX_SESSIONS must be at least 1");
        }

        let secret_key = lookup("ROCKET_SECRET_KEY")
            .or(section.secret_key)
            .filter(|key| !key.trim().is_empty());
        if environment == "production" && secret_key.is_none() {
            anyhow::bail!(
                "ROCKET_SECRET_KEY must be set in production (generate one with `openssl rand -base64 32`)"
            );
        }

        validate_backend_url(&url)?;

        Ok(Self {
            environment,
            backend: BackendConfig {
                url,
                timeout_seconds,
                linkedin_dedicated_endpoint,
            },
            server: ServerConfig {
                address,
                port,
                form_limit_kib,
                session_idle_minutes,
                max_sessions,
                secret_key,
            },
        })
    }

    pub fn with_backend_url(mut self, url: String) -> Result<Self> {
        validate_backend_url(&url)?;
        self.backend.url = url;
        Ok(self)
    }
}

fn validate_backend_url(url: &str) -> Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("Backend URL must start with http:// or https://: {}", url);
    }
    Ok(())
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("Invalid boolean value: {}", other),
    }
}
