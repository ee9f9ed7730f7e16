//! `prodman-core` — product-management domain types.
//!
//! This crate contains **pure** data types shared by the client, the store and
//! the frontend (no IO, no HTTP, no async).

pub mod error;
pub mod id;
pub mod product;
pub mod query;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use product::{Product, ProductPage, ProductType, ProductTypes, UploadedImage};
pub use query::{ListQuery, QueryValue, SortOrder};
