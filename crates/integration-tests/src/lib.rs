//! Integration tests for BramsStore.
//!
//! The helpers here boot the storefront router on an ephemeral port with
//! the fallback catalog, so the HTTP tests run without any network or
//! remote catalog source.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bramsstore-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;

use bramsstore_storefront::config::StorefrontConfig;
use bramsstore_storefront::routes;
use bramsstore_storefront::state::AppState;
use bramsstore_storefront::store::CatalogSnapshot;

/// A storefront instance bound to an ephemeral local port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Absolute URL for a request path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Spawn the storefront with the built-in catalog and default config.
///
/// # Panics
///
/// Panics if the listener cannot bind; tests have no way to recover.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(CatalogSnapshot::remote(
        bramsstore_storefront::catalog::fallback::catalog(),
    ))
    .await
}

/// Spawn the storefront seeded with a specific catalog snapshot.
///
/// # Panics
///
/// Panics if the listener cannot bind.
pub async fn spawn_app_with(snapshot: CatalogSnapshot) -> TestApp {
    let state = AppState::new(StorefrontConfig::default(), snapshot);

    let app = Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server error");
    });

    TestApp {
        addr,
        client: reqwest::Client::new(),
    }
}
