//! Wire formats for the remote catalog resource.
//!
//! The catalog source has shipped several payload shapes over time:
//!
//! - envelope: `{ "products": [...] }` or a bare array
//! - records: flat fields (`price`, `stock`, `image`) or nested groups
//!   (`pricing.price`, `inventory.available`, `media.primaryImage`)
//!
//! All of them adapt into [`Product`] here; the rest of the crate only ever
//! sees the unified type.

use serde::Deserialize;

use bramsstore_core::{Category, Price, Product, ProductId};

use super::CatalogError;

/// Top-level payload: object envelope or bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped { products: Vec<WireProduct> },
    Bare(Vec<WireProduct>),
}

impl Envelope {
    fn into_records(self) -> Vec<WireProduct> {
        match self {
            Self::Wrapped { products } | Self::Bare(products) => products,
        }
    }
}

/// A product record in either of the two observed shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireProduct {
    Flat(FlatProduct),
    Nested(NestedProduct),
}

/// Product ids appear both as JSON numbers and strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireId> for ProductId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => Self::new(n.to_string()),
            WireId::Text(s) => Self::new(s),
        }
    }
}

/// Early catalog iterations: everything top-level.
#[derive(Debug, Deserialize)]
struct FlatProduct {
    id: WireId,
    name: String,
    #[serde(default)]
    description: String,
    price: i64,
    #[serde(default)]
    stock: u32,
    category: Category,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    image: String,
}

/// Later catalog iterations: grouped sub-objects.
#[derive(Debug, Deserialize)]
struct NestedProduct {
    id: WireId,
    name: String,
    #[serde(default)]
    description: String,
    category: Category,
    #[serde(default)]
    featured: bool,
    pricing: WirePricing,
    #[serde(default)]
    inventory: WireInventory,
    #[serde(default)]
    media: WireMedia,
}

#[derive(Debug, Deserialize)]
struct WirePricing {
    price: i64,
}

#[derive(Debug, Default, Deserialize)]
struct WireInventory {
    #[serde(default)]
    available: u32,
}

#[derive(Debug, Default, Deserialize)]
struct WireMedia {
    #[serde(default, rename = "primaryImage")]
    primary_image: String,
}

impl WireProduct {
    fn into_product(self) -> Result<Product, CatalogError> {
        let (id, name, description, price, stock, category, featured, image) = match self {
            Self::Flat(p) => (
                p.id,
                p.name,
                p.description,
                p.price,
                p.stock,
                p.category,
                p.featured,
                p.image,
            ),
            Self::Nested(p) => (
                p.id,
                p.name,
                p.description,
                p.pricing.price,
                p.inventory.available,
                p.category,
                p.featured,
                p.media.primary_image,
            ),
        };

        if price <= 0 {
            return Err(CatalogError::Invalid(format!(
                "product {} has non-positive price {price}",
                ProductId::from(id)
            )));
        }

        Ok(Product {
            id: id.into(),
            name,
            description,
            unit_price: Price::from_minor_units(price),
            stock,
            category,
            featured,
            image,
        })
    }
}

/// Parse a catalog payload into products, in payload order.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for non-JSON or structurally malformed
/// payloads and [`CatalogError::Invalid`] for records that parse but break
/// a domain rule (non-positive price).
pub(crate) fn parse_catalog(body: &str) -> Result<Vec<Product>, CatalogError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    envelope
        .into_records()
        .into_iter()
        .map(WireProduct::into_product)
        .collect()
}
