//! Catalog route handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;
use crate::store::{CatalogSnapshot, CatalogSource};

/// Catalog status response body.
#[derive(Debug, Serialize)]
pub struct StatusView {
    pub source: CatalogSource,
    pub product_count: usize,
    pub loaded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl StatusView {
    fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        Self {
            source: snapshot.source,
            product_count: snapshot.products.len(),
            loaded_at: snapshot.loaded_at,
            notice: snapshot.notice.clone(),
        }
    }
}

/// GET /catalog/status
#[instrument(skip(state))]
pub async fn status(State(state): State<AppState>) -> Json<StatusView> {
    let store = state.store().read().await;
    Json(StatusView::from_snapshot(store.catalog()))
}

/// POST /catalog/sync
///
/// Re-fetches the remote catalog and swaps it in. The cart is untouched;
/// a fetch failure falls back rather than erroring.
#[instrument(skip(state))]
pub async fn sync(State(state): State<AppState>) -> Json<StatusView> {
    let snapshot = state.catalog().load_or_fallback().await;

    let mut store = state.store().write().await;
    store.replace_catalog(snapshot);
    Json(StatusView::from_snapshot(store.catalog()))
}
