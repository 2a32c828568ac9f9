//! Remote catalog loading.
//!
//! The catalog is a static JSON resource fetched once at startup and again
//! on each manual sync. Every failure is recovered the same way: the
//! built-in fallback catalog is substituted and a dismissible notice is
//! recorded. A catalog-load failure is never fatal.

pub mod fallback;
pub mod filter;
mod wire;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

use bramsstore_core::Product;

use crate::store::CatalogSnapshot;

/// Errors that can occur when loading the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network error).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("catalog source returned HTTP {0}")]
    Status(StatusCode),

    /// The body was not valid catalog JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but broke a domain rule.
    #[error("invalid catalog record: {0}")]
    Invalid(String),

    /// The payload contained no products.
    #[error("catalog source returned an empty product list")]
    Empty,
}

/// Client for the remote catalog resource.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    url: Url,
}

impl CatalogClient {
    /// Create a client for the given catalog URL.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// The catalog URL this client fetches.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and adapt the remote catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on transport failure, non-success status,
    /// malformed payload, or an empty product list.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();

        // Get the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "catalog source returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let products = wire::parse_catalog(&body)?;

        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(products)
    }

    /// Fetch the remote catalog, substituting the fallback list on failure.
    ///
    /// The snapshot always comes back usable, with its provenance and an
    /// informational notice recorded when the remote source was unusable.
    pub async fn load_or_fallback(&self) -> CatalogSnapshot {
        match self.fetch().await {
            Ok(products) => {
                info!(count = products.len(), "loaded remote catalog");
                CatalogSnapshot::remote(products)
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed, using fallback catalog");
                CatalogSnapshot::fallback(format!(
                    "Showing the built-in catalog; the remote source could not be loaded ({e})."
                ))
            }
        }
    }
}

/// Parse a raw catalog payload without fetching.
///
/// # Errors
///
/// Same taxonomy as [`CatalogClient::fetch`], minus the transport variants.
pub fn parse_payload(body: &str) -> Result<Vec<Product>, CatalogError> {
    let products = wire::parse_catalog(body)?;
    if products.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(products)
}
