//! Catalog inspection commands.

use std::collections::BTreeMap;

use url::Url;

use bramsstore_storefront::catalog::{self, CatalogClient};
use bramsstore_storefront::config::StorefrontConfig;

/// Fetch the catalog from `url` (or the configured source) and report
/// what parsed. Exits non-zero on fetch or parse failure so the command
/// works as a health probe for the remote source.
pub async fn check(url: Option<Url>) -> Result<(), Box<dyn std::error::Error>> {
    let url = match url {
        Some(url) => url,
        None => StorefrontConfig::from_env()?.catalog_url,
    };

    tracing::info!("Fetching catalog from {url}");
    let client = CatalogClient::new(url);
    let products = client.fetch().await?;

    tracing::info!("Catalog OK: {} products", products.len());

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for product in &products {
        *by_category.entry(product.category.as_str()).or_default() += 1;
    }
    for (category, count) in by_category {
        tracing::info!("  {category}: {count}");
    }

    Ok(())
}

/// Dump the built-in fallback catalog as pretty-printed JSON.
#[allow(clippy::print_stdout)]
pub fn fallback() -> Result<(), Box<dyn std::error::Error>> {
    let products = catalog::fallback::catalog();
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}
