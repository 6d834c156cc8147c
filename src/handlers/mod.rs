//! HTTP handlers for the product API.

pub mod product;
pub use product::*;
