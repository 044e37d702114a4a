//! Product catalog REST service integration module.
//!
//! Provides the client for fetching, creating, and updating products.

pub mod client;
pub mod models;

pub use client::CatalogClient;
pub use models::{Product, ProductPayload};
