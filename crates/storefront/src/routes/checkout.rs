//! Checkout route handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::{info, instrument};

use bramsstore_core::{CustomerInfo, Price};

use crate::checkout::OrderConfirmation;
use crate::error::AppError;
use crate::state::AppState;

/// GET /checkout/customer
#[instrument(skip(state))]
pub async fn customer(State(state): State<AppState>) -> Json<CustomerInfo> {
    let store = state.store().read().await;
    Json(store.customer().clone())
}

/// PUT /checkout/customer
///
/// Replaces the whole draft; clients resend the full form on each edit.
#[instrument(skip(state, body))]
pub async fn set_customer(
    State(state): State<AppState>,
    Json(body): Json<CustomerInfo>,
) -> Json<CustomerInfo> {
    let mut store = state.store().write().await;
    store.set_customer(body);
    Json(store.customer().clone())
}

/// Confirmation response body.
#[derive(Debug, Serialize)]
pub struct ConfirmationView {
    #[serde(flatten)]
    pub confirmation: OrderConfirmation,
    pub total_display: String,
}

/// POST /checkout
///
/// On success the cart is emptied and the draft reset; on rejection the
/// response carries every offending field and nothing is mutated.
#[instrument(skip(state))]
pub async fn submit(State(state): State<AppState>) -> Result<Json<ConfirmationView>, AppError> {
    let shipping: Price = state.config().shipping_fee;
    let currency = state.config().currency;

    let mut store = state.store().write().await;
    let confirmation = store.submit_checkout(shipping, currency)?;

    info!(
        order_id = %confirmation.order_id,
        total = confirmation.total.minor_units(),
        "checkout confirmed"
    );

    let total_display = confirmation.total.format(currency);
    Ok(Json(ConfirmationView {
        confirmation,
        total_display,
    }))
}
