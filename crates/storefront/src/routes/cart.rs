//! Cart route handlers.
//!
//! Every mutation returns the refreshed [`CartView`] so the caller never
//! needs a second request to redraw.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bramsstore_core::{Cart, Price, ProductId};

use crate::error::AppError;
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
    pub line_total_display: String,
}

/// Cart display data.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub total: Price,
    pub total_display: String,
}

impl CartView {
    fn from_cart(cart: &Cart, state: &AppState) -> Self {
        let currency = state.config().currency;
        let items = cart
            .lines()
            .iter()
            .map(|line| CartItemView {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                image: line.image.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_total: line.line_total(),
                line_total_display: line.line_total().format(currency),
            })
            .collect();

        Self {
            items,
            item_count: cart.item_count(),
            total: cart.total(),
            total_display: cart.total().format(currency),
        }
    }
}

/// Body for `POST /cart/add` and `POST /cart/remove`.
#[derive(Debug, Deserialize)]
pub struct LineSelector {
    pub product_id: ProductId,
}

/// Body for `POST /cart/update`.
#[derive(Debug, Deserialize)]
pub struct QuantityUpdate {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// GET /cart
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let store = state.store().read().await;
    Json(CartView::from_cart(store.cart(), &state))
}

/// POST /cart/add
///
/// Adds one unit; an existing line has its quantity bumped instead of a
/// duplicate line being created.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<LineSelector>,
) -> Result<Json<CartView>, AppError> {
    let mut store = state.store().write().await;
    store
        .add_to_cart(&body.product_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(CartView::from_cart(store.cart(), &state)))
}

/// POST /cart/update
///
/// A quantity of zero or less removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<QuantityUpdate>,
) -> Json<CartView> {
    let mut store = state.store().write().await;
    store.set_cart_quantity(&body.product_id, body.quantity);
    Json(CartView::from_cart(store.cart(), &state))
}

/// POST /cart/remove
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<LineSelector>,
) -> Json<CartView> {
    let mut store = state.store().write().await;
    store.remove_from_cart(&body.product_id);
    Json(CartView::from_cart(store.cart(), &state))
}

/// POST /cart/clear
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    let mut store = state.store().write().await;
    store.clear_cart();
    Json(CartView::from_cart(store.cart(), &state))
}

/// GET /cart/count
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = state.store().read().await;
    Json(serde_json::json!({ "count": store.cart().item_count() }))
}
