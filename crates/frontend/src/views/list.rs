//! Product list page.

use std::sync::Arc;

use prodman_client::{ApiResult, ProductApi};
use prodman_core::{ListQuery, ProductId, ProductPage, ProductType};
use prodman_store::ProductStore;

/// Lists products and offers the type catalog as a filter.
#[derive(Clone)]
pub struct ProductListView {
    api: Arc<dyn ProductApi>,
    store: Arc<ProductStore>,
}

impl ProductListView {
    pub fn new(api: Arc<dyn ProductApi>, store: Arc<ProductStore>) -> Self {
        Self { api, store }
    }

    /// Refresh the type catalog and list products matching `query`.
    ///
    /// A failed catalog refresh is absorbed by the store; only the product
    /// listing can fail here.
    pub async fn load(&self, query: &ListQuery) -> ApiResult<ProductPage> {
        let ((), page) = tokio::join!(self.store.fetch_product_types(), self.api.list_products(query));
        Ok(page?.into_body())
    }

    /// Types for the filter dropdown, straight from the store.
    pub fn type_filter_options(&self) -> Vec<ProductType> {
        self.store.product_types()
    }

    pub async fn delete(&self, id: ProductId) -> ApiResult<()> {
        self.api.delete_product(id).await?;
        tracing::info!(%id, "product deleted");
        Ok(())
    }
}
