use serde::Deserialize;
use std::env;
use std::fs;

use crate::domain::errors::ConfigError;
use crate::domain::pricing::PricingConfig;
use crate::domain::role::RedirectTargets;

const DEFAULT_HTTP_PORT: u16 = 3004;
const DEFAULT_ACCEPTED_CODE: &str = "1234";
const DEFAULT_LEVEL: u32 = 7;
const DEFAULT_SESSION_IDLE_TTL_SECONDS: u64 = 900;

// Runtime settings. Built-in defaults, then an optional TOML file named by
// AIROOH_CONFIG, then individual environment overrides.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http_port: u16,
    pub accepted_code: String,
    pub level: u32,
    // Login sessions untouched for this long are dropped.
    pub session_idle_ttl_seconds: u64,
    pub pricing: PricingConfig,
    pub redirects: RedirectTargets,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            accepted_code: DEFAULT_ACCEPTED_CODE.to_string(),
            level: DEFAULT_LEVEL,
            session_idle_ttl_seconds: DEFAULT_SESSION_IDLE_TTL_SECONDS,
            pricing: PricingConfig::default(),
            redirects: RedirectTargets::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("AIROOH_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &raw)
    }

    pub fn from_toml(path: &str, raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    // Lookup is injected so tests do not have to touch the process env.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("AIROOH_PORT") {
            self.http_port = parse_env("AIROOH_PORT", value)?;
        }
        if let Some(value) = lookup("AIROOH_COMMISSION_RATE") {
            self.pricing.commission_rate = parse_env("AIROOH_COMMISSION_RATE", value)?;
        }
        if let Some(value) = lookup("AIROOH_DELIVERY_FEE") {
            self.pricing.delivery_fee = parse_env("AIROOH_DELIVERY_FEE", value)?;
        }
        if let Some(value) = lookup("AIROOH_SESSION_TTL_SECONDS") {
            self.session_idle_ttl_seconds = parse_env("AIROOH_SESSION_TTL_SECONDS", value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accepted_code.is_empty() {
            return Err(ConfigError::EmptyAcceptedCode);
        }
        if self.session_idle_ttl_seconds == 0 {
            return Err(ConfigError::ZeroSessionTtl);
        }
        self.pricing.validate()?;
        self.redirects.validate()?;
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}
