//! View models behind the two routes.

pub mod edit;
pub mod list;

pub use edit::EditProductView;
pub use list::ProductListView;
