//! Client configuration

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable holding the endpoint URI
pub const ENV_ENDPOINT: &str = "INVEST_ENDPOINT";
/// Environment variable holding the API token
pub const ENV_TOKEN: &str = "INVEST_TOKEN";
/// Environment variable holding the application name
pub const ENV_APP_NAME: &str = "INVEST_APP_NAME";
/// Environment variable holding the connect timeout in seconds
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "INVEST_CONNECT_TIMEOUT_SECS";
/// Environment variable holding the request timeout in seconds
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "INVEST_REQUEST_TIMEOUT_SECS";
/// Environment variable toggling the start-up schema check
pub const ENV_VERIFY_SCHEMA: &str = "INVEST_VERIFY_SCHEMA";

/// Invest API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service endpoint
    pub endpoint: String,
    /// Bearer token sent as `authorization`
    pub token: Option<String>,
    /// Application name sent as `x-app-name`
    pub app_name: Option<String>,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Check the embedded schema against the pinned wire layout at start-up
    pub verify_schema: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:50051".to_string(),
            token: None,
            app_name: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            verify_schema: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment over defaults
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from `lookup` over defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        config.token = lookup(ENV_TOKEN).or(config.token);
        config.app_name = lookup(ENV_APP_NAME).or(config.app_name);
        if let Some(value) = lookup(ENV_CONNECT_TIMEOUT_SECS) {
            config.connect_timeout_secs = parse(ENV_CONNECT_TIMEOUT_SECS, &value)?;
        }
        if let Some(value) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            config.request_timeout_secs = parse(ENV_REQUEST_TIMEOUT_SECS, &value)?;
        }
        if let Some(value) = lookup(ENV_VERIFY_SCHEMA) {
            config.verify_schema = parse(ENV_VERIFY_SCHEMA, &value)?;
        }
        Ok(config)
    }
}

fn parse<T>(key: &str, value: &str) -> ClientResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ClientError::Config(format!("Invalid {key}: {e}")))
}
