//! Configuration management for the lead capture core.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file) and then injected into the submitter and controller.
//! Nothing reads the environment after that.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;

/// Lead API endpoint used when running against production.
pub const DEFAULT_PRODUCTION_URL: &str =
    "https://facturapro-api-production.up.railway.app/api/clientes";

/// Lead API endpoint used during local development.
pub const DEFAULT_DEVELOPMENT_URL: &str = "http://localhost:3000/api/clientes";

/// Build environment that selects which lead API endpoint is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnvironment {
    Production,
    Development,
}

impl ApiEnvironment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// Configuration for the landing page lead flow.
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment the endpoint was selected for
    pub api_environment: ApiEnvironment,

    /// Lead API endpoint receiving the POST
    pub lead_api_url: String,

    /// Bearer token for the lead API; `None` means the API is not configured
    pub lead_api_token: Option<String>,

    /// Value sent as `proviene`
    pub lead_source: String,

    /// Value sent as `categoria`
    pub lead_category: String,

    /// Business WhatsApp number used in the deep link (digits only)
    pub whatsapp_number: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional:
    /// - `LEAD_API_ENV`: `production` (default) or `development`
    /// - `LEAD_API_PRODUCTION_URL` / `LEAD_API_DEVELOPMENT_URL`: per-environment endpoints
    /// - `LEAD_API_URL`: explicit endpoint, overrides the environment selection
    /// - `LEAD_API_TOKEN`: bearer token (absent or blank = not configured)
    /// - `LEAD_SOURCE`: lead source label (default: "Tu Guía Digital")
    /// - `LEAD_CATEGORY`: lead category (default: "lead")
    /// - `WHATSAPP_NUMBER`: deep-link number (default: "9392283101")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let api_environment = match env::var("LEAD_API_ENV") {
            Ok(val) => ApiEnvironment::parse(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: "LEAD_API_ENV".to_string(),
                reason: format!("Must be 'production' or 'development', got: {}", val),
            })?,
            Err(_) => ApiEnvironment::Production,
        };

        let lead_api_url = match env::var("LEAD_API_URL") {
            Ok(url) => url,
            Err(_) => match api_environment {
                ApiEnvironment::Production => env::var("LEAD_API_PRODUCTION_URL")
                    .unwrap_or_else(|_| DEFAULT_PRODUCTION_URL.to_string()),
                ApiEnvironment::Development => env::var("LEAD_API_DEVELOPMENT_URL")
                    .unwrap_or_else(|_| DEFAULT_DEVELOPMENT_URL.to_string()),
            },
        };

        if !lead_api_url.starts_with("http://") && !lead_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "LEAD_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let lead_api_token = env::var("LEAD_API_TOKEN")
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let lead_source = env::var("LEAD_SOURCE").unwrap_or(defaults.lead_source);
        let lead_category = env::var("LEAD_CATEGORY").unwrap_or(defaults.lead_category);

        let whatsapp_number = env::var("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number);
        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "WHATSAPP_NUMBER".to_string(),
                reason: format!("Must contain only digits, got: {}", whatsapp_number),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            api_environment,
            lead_api_url,
            lead_api_token,
            lead_source,
            lead_category,
            whatsapp_number,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_environment: ApiEnvironment::Production,
            lead_api_url: DEFAULT_PRODUCTION_URL.to_string(),
            lead_api_token: None,
            lead_source: "Tu Guía Digital".to_string(),
            lead_category: "lead".to_string(),
            whatsapp_number: "9392283101".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
