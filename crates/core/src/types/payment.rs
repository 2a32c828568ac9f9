//! Payment method identifiers.

use serde::{Deserialize, Serialize};

/// Payment method chosen on the checkout form.
///
/// No payment integration exists; the identifier is echoed back in the
/// order confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// SINPE Móvil bank transfer.
    Sinpe,
    /// PayPal.
    Paypal,
    /// Cash on delivery.
    Cash,
}

impl PaymentMethod {
    /// Stable identifier used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Sinpe => "sinpe",
            Self::Paypal => "paypal",
            Self::Cash => "cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "sinpe" => Ok(Self::Sinpe),
            "paypal" => Ok(Self::Paypal),
            "cash" => Ok(Self::Cash),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}
