use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::store::{CatalogSnapshot, Store};

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    store: RwLock<Store>,
}

impl AppState {
    /// Build the state from the loaded configuration and the initial
    /// catalog snapshot (remote or fallback).
    #[must_use]
    pub fn new(config: StorefrontConfig, snapshot: CatalogSnapshot) -> Self {
        let catalog = CatalogClient::new(config.catalog_url.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                store: RwLock::new(Store::new(snapshot)),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    #[must_use]
    pub fn store(&self) -> &RwLock<Store> {
        &self.inner.store
    }
}
