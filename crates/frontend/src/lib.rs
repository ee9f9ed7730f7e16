//! `prodman-frontend`
//!
//! **Responsibility:** the navigation table, the two views, and the
//! application bootstrap that wires them to the API client and the store.
//!
//! Views are headless view models: they load and save data and leave
//! presentation to the host.

pub mod app;
pub mod routes;
pub mod views;

pub use app::{AppState, OpenError, Rendered};
pub use routes::{resolve, View};
