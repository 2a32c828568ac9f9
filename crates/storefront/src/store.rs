//! The storefront's explicit in-memory store.
//!
//! All session state lives here: the catalog snapshot (with its
//! provenance), the cart, and the draft customer info. Handlers never
//! assign fields directly; every mutation goes through a named operation.
//! There is exactly one logical writer at a time (the store sits behind the
//! state's `RwLock`), so each operation is atomic from the caller's view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bramsstore_core::{Cart, Currency, CustomerInfo, Price, Product, ProductId};

use crate::catalog::fallback;
use crate::checkout::{self, CheckoutRejection, OrderConfirmation};

/// Where the current catalog snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Loaded from the remote JSON resource.
    Remote,
    /// The built-in fallback list (remote source failed).
    Fallback,
}

/// A loaded catalog plus its provenance.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// Products in catalog order.
    pub products: Vec<Product>,
    /// Provenance of this snapshot.
    pub source: CatalogSource,
    /// Informational notice to surface when the remote source failed.
    pub notice: Option<String>,
    /// When this snapshot was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Snapshot from a successful remote fetch.
    #[must_use]
    pub fn remote(products: Vec<Product>) -> Self {
        Self {
            products,
            source: CatalogSource::Remote,
            notice: None,
            loaded_at: Utc::now(),
        }
    }

    /// Snapshot from the built-in fallback list, with a user-facing notice.
    #[must_use]
    pub fn fallback(notice: String) -> Self {
        Self {
            products: fallback::catalog(),
            source: CatalogSource::Fallback,
            notice: Some(notice),
            loaded_at: Utc::now(),
        }
    }
}

/// Error returned when a cart operation references an unknown product.
#[derive(Debug, thiserror::Error)]
#[error("unknown product: {0}")]
pub struct UnknownProduct(pub ProductId);

/// All mutable storefront state.
#[derive(Debug)]
pub struct Store {
    catalog: CatalogSnapshot,
    cart: Cart,
    customer: CustomerInfo,
}

impl Store {
    /// Create a store over a loaded catalog, with an empty cart and an
    /// empty customer draft.
    #[must_use]
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            customer: CustomerInfo::default(),
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The current catalog snapshot.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.catalog.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.products.iter().find(|p| &p.id == id)
    }

    /// Replace the catalog snapshot (manual sync or startup load).
    ///
    /// The cart keeps its display snapshots; lines referencing products
    /// that vanished from the catalog stay in the cart unchanged.
    pub fn replace_catalog(&mut self, snapshot: CatalogSnapshot) {
        self.catalog = snapshot;
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of the product with `id` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownProduct`] if `id` is not in the current catalog.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<(), UnknownProduct> {
        let product = self
            .product(id)
            .cloned()
            .ok_or_else(|| UnknownProduct(id.clone()))?;
        self.cart.add(&product);
        Ok(())
    }

    /// Set the quantity of a cart line; zero or below removes the line.
    pub fn set_cart_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.cart.set_quantity(id, quantity);
    }

    /// Remove a cart line if present.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// The current customer draft.
    #[must_use]
    pub const fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Replace the customer draft with the submitted form state.
    pub fn set_customer(&mut self, customer: CustomerInfo) {
        self.customer = customer;
    }

    /// Submit the checkout.
    ///
    /// Validates the customer draft and the cart; on success clears the
    /// cart, resets the draft, and returns the confirmation. On rejection
    /// nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutRejection`] listing every missing or invalid field
    /// (including an empty cart).
    pub fn submit_checkout(
        &mut self,
        shipping_fee: Price,
        currency: Currency,
    ) -> Result<OrderConfirmation, CheckoutRejection> {
        checkout::validate(&self.customer, &self.cart)?;

        let confirmation =
            checkout::confirm(&self.cart, &self.customer, shipping_fee, currency, Utc::now());

        self.cart.clear();
        self.customer.reset();

        Ok(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bramsstore_core::PaymentMethod;

    fn store() -> Store {
        Store::new(CatalogSnapshot::remote(fallback::catalog()))
    }

    fn valid_customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ana Solís".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: "8888-0000".to_owned(),
            address: "Avenida Central".to_owned(),
            city: "San José".to_owned(),
            postal_code: "10101".to_owned(),
            payment_method: PaymentMethod::Sinpe,
        }
    }

    #[test]
    fn test_add_unknown_product_is_an_error() {
        let mut store = store();
        let result = store.add_to_cart(&ProductId::new("nope"));
        assert!(result.is_err());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_known_product() {
        let mut store = store();
        store.add_to_cart(&ProductId::new("1")).unwrap();
        assert_eq!(store.cart().item_count(), 1);
    }

    #[test]
    fn test_replace_catalog_keeps_cart() {
        let mut store = store();
        store.add_to_cart(&ProductId::new("1")).unwrap();

        store.replace_catalog(CatalogSnapshot::fallback("remote gone".to_owned()));

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.catalog().source, CatalogSource::Fallback);
    }

    #[test]
    fn test_rejected_checkout_mutates_nothing() {
        let mut store = store();
        store.add_to_cart(&ProductId::new("1")).unwrap();
        let mut customer = valid_customer();
        customer.email = "not-an-email".to_owned();
        store.set_customer(customer.clone());

        let result = store.submit_checkout(Price::ZERO, Currency::Crc);

        assert!(result.is_err());
        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.customer(), &customer);
    }

    #[test]
    fn test_accepted_checkout_clears_cart_and_resets_draft() {
        let mut store = store();
        store.add_to_cart(&ProductId::new("1")).unwrap();
        store.add_to_cart(&ProductId::new("2")).unwrap();
        store.set_customer(valid_customer());

        let confirmation = store.submit_checkout(Price::ZERO, Currency::Crc).unwrap();

        assert_eq!(confirmation.subtotal.minor_units(), 650_000 + 125_000);
        assert!(store.cart().is_empty());
        assert_eq!(store.customer(), &CustomerInfo::default());
    }

    #[test]
    fn test_checkout_with_empty_cart_rejected_without_side_effects() {
        let mut store = store();
        store.set_customer(valid_customer());

        let result = store.submit_checkout(Price::ZERO, Currency::Crc);

        assert!(result.is_err());
        assert_eq!(store.customer(), &valid_customer());
    }
}
