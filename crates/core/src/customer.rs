//! Customer information collected by the checkout form.

use serde::{Deserialize, Serialize};

use crate::types::PaymentMethod;

/// Draft customer details for checkout.
///
/// Created empty, mutated field-by-field as the user types, and reset to
/// empty after a successful submission. Validation happens at submit time,
/// not here; fields stay raw strings until then.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Full name (required).
    #[serde(default)]
    pub name: String,
    /// Email address (required, must look like `local@domain.tld`).
    #[serde(default)]
    pub email: String,
    /// Phone number (required).
    #[serde(default)]
    pub phone: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Postal code.
    #[serde(default)]
    pub postal_code: String,
    /// Chosen payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CustomerInfo {
    /// Reset every field to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
