//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront runs with defaults.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_URL` - Remote catalog JSON resource (default: the public
//!   BramsStore data file)
//! - `CHECKOUT_SHIPPING_FEE` - Flat shipping surcharge in minor currency
//!   units added to the checkout total (default: 0)
//! - `STORE_CURRENCY` - Display currency code (default: CRC)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

use bramsstore_core::{Currency, Price};

/// Default remote catalog source.
const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/Lex-Salas/bramsstore-data/main/products.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote catalog JSON resource
    pub catalog_url: Url,
    /// Flat shipping surcharge added to the checkout total
    pub shipping_fee: Price,
    /// Display currency
    pub currency: Currency,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_host(&get_env_or_default("STOREFRONT_HOST", "127.0.0.1"))?;
        let port = parse_port(&get_env_or_default("STOREFRONT_PORT", "3000"))?;
        let catalog_url = parse_catalog_url(&get_env_or_default("CATALOG_URL", DEFAULT_CATALOG_URL))?;
        let shipping_fee = parse_shipping_fee(&get_env_or_default("CHECKOUT_SHIPPING_FEE", "0"))?;
        let currency = parse_currency(&get_env_or_default("STORE_CURRENCY", "CRC"))?;

        Ok(Self {
            host,
            port,
            catalog_url,
            shipping_fee,
            currency,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    /// Defaults used when no environment is present (tests, CLI demo).
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            // The constant is a valid URL; parsing it cannot fail.
            #[allow(clippy::unwrap_used)]
            catalog_url: Url::parse(DEFAULT_CATALOG_URL).unwrap(),
            shipping_fee: Price::ZERO,
            currency: Currency::Crc,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))
}

fn parse_catalog_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_URL".to_string(), e.to_string()))
}

fn parse_shipping_fee(value: &str) -> Result<Price, ConfigError> {
    let minor = value.parse::<i64>().map_err(|e| {
        ConfigError::InvalidEnvVar("CHECKOUT_SHIPPING_FEE".to_string(), e.to_string())
    })?;
    if minor < 0 {
        return Err(ConfigError::InvalidEnvVar(
            "CHECKOUT_SHIPPING_FEE".to_string(),
            "must not be negative".to_string(),
        ));
    }
    Ok(Price::from_minor_units(minor))
}

fn parse_currency(value: &str) -> Result<Currency, ConfigError> {
    value
        .parse::<Currency>()
        .map_err(|e| ConfigError::InvalidEnvVar("STORE_CURRENCY".to_string(), e))
}
