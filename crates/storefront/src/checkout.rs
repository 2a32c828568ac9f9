//! The checkout submitter.
//!
//! Validation collects every problem at once so the form can report the
//! full list of offending fields. Once validation passes there is nothing
//! left that can fail: no payment gateway, no persistence, no network. The
//! flow is Idle -> Validating -> Rejected | Accepted -> Idle, with no
//! pending state and nothing to retry.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use thiserror::Error;

use bramsstore_core::{Cart, Currency, CustomerInfo, Email, OrderId, PaymentMethod, Price};

/// A single validation problem, tagged with the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field identifier (`name`, `email`, `phone`, `cart`).
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Checkout rejected: one or more fields are missing or invalid.
///
/// Carries the complete list of problems; rejection has no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("checkout rejected: {}", summary(.errors))]
pub struct CheckoutRejection {
    /// Every offending field, in form order.
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate the customer draft and the cart.
///
/// # Errors
///
/// Returns a [`CheckoutRejection`] listing every missing or invalid field.
/// Name, email, and phone are required; the email must look like
/// `local@domain.tld`; the cart must be non-empty.
pub fn validate(customer: &CustomerInfo, cart: &Cart) -> Result<(), CheckoutRejection> {
    let mut errors = Vec::new();

    if customer.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "name is required".to_owned(),
        });
    }

    if customer.email.trim().is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "email is required".to_owned(),
        });
    } else if let Err(e) = Email::parse(customer.email.trim()) {
        errors.push(FieldError {
            field: "email",
            message: e.to_string(),
        });
    }

    if customer.phone.trim().is_empty() {
        errors.push(FieldError {
            field: "phone",
            message: "phone is required".to_owned(),
        });
    }

    if cart.is_empty() {
        errors.push(FieldError {
            field: "cart",
            message: "cart is empty".to_owned(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CheckoutRejection { errors })
    }
}

/// A confirmed (simulated) order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    /// Synthesized order identifier (uniqueness is probabilistic only).
    pub order_id: OrderId,
    /// Who placed the order.
    pub customer_name: String,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Total number of units ordered.
    pub item_count: u32,
    /// Cart total before shipping.
    pub subtotal: Price,
    /// Flat shipping surcharge.
    pub shipping: Price,
    /// Displayed order total (subtotal plus shipping).
    pub total: Price,
    /// Human-readable confirmation.
    pub message: String,
}

/// Build the confirmation for a validated checkout.
///
/// Callers are responsible for clearing the cart and resetting the draft
/// afterwards; this function only derives the terminal display values.
#[must_use]
pub fn confirm(
    cart: &Cart,
    customer: &CustomerInfo,
    shipping_fee: Price,
    currency: Currency,
    now: DateTime<Utc>,
) -> OrderConfirmation {
    let subtotal = cart.total();
    let total = subtotal + shipping_fee;
    let order_id = synthesize_order_id(now);

    let message = format!(
        "¡Gracias por su compra, {}! Pedido {} confirmado por {}.",
        customer.name.trim(),
        order_id,
        total.format(currency)
    );

    OrderConfirmation {
        order_id,
        customer_name: customer.name.trim().to_owned(),
        payment_method: customer.payment_method,
        item_count: cart.item_count(),
        subtotal,
        shipping: shipping_fee,
        total,
        message,
    }
}

/// Synthesize an order identifier from the current time.
///
/// Format: `BS-{year}-{six time-derived digits}`. The suffix comes from the
/// millisecond clock, so uniqueness is probabilistic, not guaranteed.
fn synthesize_order_id(now: DateTime<Utc>) -> OrderId {
    let suffix = now.timestamp_millis().rem_euclid(1_000_000);
    OrderId::new(format!("BS-{}-{suffix:06}", now.year()))
}
