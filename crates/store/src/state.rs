//! Cached state owned by the store.

use prodman_core::ProductType;

/// The cached catalog.
///
/// Starts empty. `populated` flips to `true` on the first commit and never
/// goes back: there is no reset operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    product_types: Vec<ProductType>,
    populated: bool,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_types(&self) -> &[ProductType] {
        &self.product_types
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Replace the catalog wholesale.
    pub(crate) fn set_product_types(&mut self, types: Vec<ProductType>) {
        self.product_types = types;
        self.populated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = StoreState::new();
        assert!(state.product_types().is_empty());
        assert!(!state.is_populated());
    }

    #[test]
    fn set_replaces_instead_of_appending() {
        let mut state = StoreState::new();
        state.set_product_types(vec!["Books".into(), "Toys".into()]);
        state.set_product_types(vec!["Grocery".into()]);

        assert_eq!(state.product_types(), &[ProductType::from("Grocery")]);
    }

    #[test]
    fn committing_an_empty_catalog_still_counts_as_populated() {
        let mut state = StoreState::new();
        state.set_product_types(Vec::new());
        assert!(state.is_populated());
        assert!(state.product_types().is_empty());
    }
}
