//! The in-memory cart engine.
//!
//! A [`Cart`] is an ordered collection of [`CartLine`]s, one per product,
//! in the order products were first added. Lines hold a display snapshot of
//! the product so the cart renders without consulting the catalog. The
//! total is derived on demand and never cached.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::{Price, ProductId};

/// One row in the cart: a product reference plus a quantity.
///
/// Invariant: `quantity >= 1`. A line whose quantity would drop to zero or
/// below is removed from the cart entirely, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Identifier of the referenced product.
    pub product_id: ProductId,
    /// Display name snapshot taken when the line was created.
    pub name: String,
    /// Unit price snapshot taken when the line was created.
    pub unit_price: Price,
    /// Image URI snapshot taken when the line was created.
    pub image: String,
    /// Number of units (always >= 1).
    pub quantity: u32,
}

impl CartLine {
    /// The line subtotal: unit price times quantity.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// An in-memory shopping cart.
///
/// Created empty at session start, cleared on successful checkout or
/// explicit request, never persisted. At most one line exists per product
/// id; insertion order is the order products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1 and the product's
    /// display snapshot. Stock is not consulted; the cart can exceed it.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            image: product.image.clone(),
            quantity: 1,
        });
    }

    /// Remove the line for `product_id`, if present. No-op otherwise.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product_id != product_id);
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or below behaves as [`Cart::remove`]. No upper
    /// bound is enforced. No-op if the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// The cart total: sum of unit price times quantity over all lines.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            unit_price: Price::from_minor_units(price),
            stock: 10,
            category: Category::Accessories,
            featured: false,
            image: format!("https://img.example/{id}.jpg"),
        }
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let p = product("1", 650_000);

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.line_count(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_insertion_order_is_first_add_order() {
        let mut cart = Cart::new();
        let a = product("a", 100);
        let b = product("b", 200);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("1", 100));

        cart.remove(&ProductId::new("does-not-exist"));

        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = Cart::new();
        let p = product("1", 100);
        cart.add(&p);

        cart.set_quantity(&p.id, 7);

        assert_eq!(cart.lines().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let p = product("1", 100);
        cart.add(&p);

        cart.set_quantity(&p.id, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        let p = product("1", 100);
        cart.add(&p);

        cart.set_quantity(&p.id, -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_matches_worked_example() {
        // cart = [{id:"1", 650000 x1}, {id:"2", 125000 x2}] -> 900000
        let mut cart = Cart::new();
        let phone = product("1", 650_000);
        let headset = product("2", 125_000);

        cart.add(&phone);
        cart.add(&headset);
        cart.add(&headset);

        assert_eq!(cart.total().minor_units(), 900_000);
    }

    #[test]
    fn test_total_tracks_adds_and_removes_without_drift() {
        let mut cart = Cart::new();
        let a = product("a", 1_000);
        let b = product("b", 2_500);

        cart.add(&a);
        assert_eq!(cart.total().minor_units(), 1_000);

        cart.add(&b);
        cart.add(&b);
        assert_eq!(cart.total().minor_units(), 6_000);

        cart.remove(&a.id);
        assert_eq!(cart.total().minor_units(), 5_000);

        cart.set_quantity(&b.id, 1);
        assert_eq!(cart.total().minor_units(), 2_500);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total(), Price::ZERO);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&product("1", 100));
        cart.add(&product("2", 200));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        let a = product("a", 100);
        let b = product("b", 200);

        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 2);
    }
}
