//! The unified product record.
//!
//! The catalog source has shipped two record shapes over time (flat fields
//! and nested `pricing`/`inventory`/`media` groups). Both adapt into this
//! one type at the fetch boundary; nothing downstream sees the difference.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId};

/// A sellable product in the catalog.
///
/// Immutable for the duration of a session once loaded; a catalog sync
/// replaces the whole snapshot rather than mutating records in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Unit price in minor currency units (always positive).
    pub unit_price: Price,
    /// Available stock. Display data only; never decremented by the cart.
    pub stock: u32,
    /// Category identifier.
    pub category: Category,
    /// Whether the product is featured on the home view.
    pub featured: bool,
    /// Image URI.
    pub image: String,
}
