use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;
use validator::{Validate, ValidationError};

use crate::errors::CheckoutError;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_MERCHANT_NAME: &str = "Madhusudhan Ratnam";
const DEFAULT_CHECKOUT_DESCRIPTION: &str = "Payment for your order";
const DEFAULT_THEME_COLOR: &str = "#1a2c2e";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "STOREFRONT";

fn validate_base_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => {
            let mut err = ValidationError::new("url");
            err.message = Some("api_base_url must be an absolute http(s) URL".into());
            Err(err)
        }
    }
}

fn validate_theme_color(value: &str) -> Result<(), ValidationError> {
    let ok = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("theme_color");
        err.message = Some("theme_color must be a #rrggbb hex value".into());
        Err(err)
    }
}

/// Client configuration with validation.
///
/// Loaded from layered config files plus `STOREFRONT_`-prefixed environment
/// variables, or constructed directly for tests.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Storefront API base URL, including the version prefix
    /// (e.g. `https://shop.example.com/api/v1`).
    #[validate(custom = "validate_base_url")]
    pub api_base_url: String,

    /// Public Razorpay key id handed to the hosted checkout widget.
    #[validate(length(min = 1))]
    pub razorpay_key_id: String,

    /// Merchant display name shown in the checkout modal.
    #[serde(default = "default_merchant_name")]
    pub merchant_name: String,

    /// Line shown under the merchant name in the checkout modal.
    #[serde(default = "default_checkout_description")]
    pub checkout_description: String,

    /// Checkout modal accent color.
    #[serde(default = "default_theme_color")]
    #[validate(custom = "validate_theme_color")]
    pub theme_color: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,
}

fn default_merchant_name() -> String {
    DEFAULT_MERCHANT_NAME.to_string()
}

fn default_checkout_description() -> String {
    DEFAULT_CHECKOUT_DESCRIPTION.to_string()
}

fn default_theme_color() -> String {
    DEFAULT_THEME_COLOR.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl ClientConfig {
    /// Construct a configuration from the two required values, defaulting the
    /// rest.
    pub fn new(api_base_url: impl Into<String>, razorpay_key_id: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            razorpay_key_id: razorpay_key_id.into(),
            merchant_name: default_merchant_name(),
            checkout_description: default_checkout_description(),
            theme_color: default_theme_color(),
            request_timeout_secs: default_request_timeout_secs(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
        }
    }

    /// Load configuration from `config/default`, `config/{environment}` and
    /// the environment, then validate it.
    pub fn load() -> Result<Self, CheckoutError> {
        let environment =
            std::env::var("STOREFRONT_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENV.to_string());

        let config = Config::builder()
            .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| CheckoutError::Config(e.to_string()))?;

        let config: ClientConfig = config
            .try_deserialize()
            .map_err(|e| CheckoutError::Config(e.to_string()))?;

        config
            .validate()
            .map_err(|e| CheckoutError::Config(e.to_string()))?;

        Ok(config)
    }
}
