//! `prodman-client`
//!
//! **Responsibility:** HTTP bindings for the product backend.
//!
//! Every operation issues exactly one request and hands the outcome back
//! unchanged: no retries, no caching, no translation of HTTP failures into
//! domain meanings.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{ApiResponse, ProductApi, ProductTypesApi};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use http::HttpProductApi;
pub use reqwest::StatusCode;
