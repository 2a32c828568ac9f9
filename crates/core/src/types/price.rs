//! Type-safe price representation.
//!
//! Prices are stored as integer amounts in the smallest currency unit and
//! are only turned into decimals at display time. This keeps cart math
//! exact: totals are plain integer sums with no drift.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the smallest unit of the store currency.
///
/// Catalog prices are always positive; `Price::ZERO` exists for empty-cart
/// totals and a disabled shipping surcharge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount in minor currency units.
    #[must_use]
    pub const fn from_minor_units(amount: i64) -> Self {
        Self(amount)
    }

    /// The amount in minor currency units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Multiply by a line quantity, saturating on overflow.
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    /// Format for display in the given currency (e.g. `₡650000`, `$12.50`).
    #[must_use]
    pub fn format(&self, currency: Currency) -> String {
        let amount = Decimal::new(self.0, currency.exponent());
        if currency.exponent() == 0 {
            format!("{}{amount}", currency.symbol())
        } else {
            format!(
                "{}{:.prec$}",
                currency.symbol(),
                amount,
                prec = currency.exponent() as usize
            )
        }
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency codes supported by the store.
///
/// The BramsStore catalog is priced in Costa Rican colones, which are
/// displayed without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Crc,
    Usd,
    Eur,
}

impl Currency {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Crc => "₡",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// Number of minor-unit digits shown after the decimal point.
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        match self {
            Self::Crc => 0,
            Self::Usd | Self::Eur => 2,
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Crc => "CRC",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CRC" => Ok(Self::Crc),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}
