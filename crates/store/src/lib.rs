//! `prodman-store`
//!
//! **Responsibility:** the single source of truth for the product-type
//! catalog shared by the views.
//!
//! The store is an explicitly constructed container: build it once during
//! application bootstrap, share it behind an `Arc`, and drop it on teardown.

pub mod event;
pub mod state;
pub mod store;

pub use event::{FetchId, StoreEvent};
pub use state::StoreState;
pub use store::ProductStore;
