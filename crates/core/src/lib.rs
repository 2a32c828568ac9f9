//! BramsStore Core - Shared types library.
//!
//! This crate provides the domain types used across all BramsStore
//! components:
//! - `storefront` - Public-facing storefront service
//! - `cli` - Command-line tools for catalog checks and demos
//!
//! # Architecture
//!
//! The core crate contains only types and their local behavior - no I/O,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   categories, and payment methods
//! - [`product`] - The unified product record
//! - [`cart`] - The in-memory cart engine
//! - [`customer`] - Customer information collected for checkout

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod customer;
pub mod product;
pub mod types;

pub use cart::{Cart, CartLine};
pub use customer::CustomerInfo;
pub use product::Product;
pub use types::*;
