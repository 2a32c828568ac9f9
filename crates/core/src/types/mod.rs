//! Core types for BramsStore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod payment;
pub mod price;

pub use category::{Category, CategoryFilter};
pub use email::{Email, EmailError};
pub use id::*;
pub use payment::PaymentMethod;
pub use price::{Currency, Price};
