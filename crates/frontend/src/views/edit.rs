//! Create/edit product page.

use std::sync::Arc;

use prodman_client::{ApiResult, ProductApi};
use prodman_core::{Product, ProductId, ProductType};
use prodman_store::ProductStore;

#[derive(Clone)]
pub struct EditProductView {
    api: Arc<dyn ProductApi>,
    store: Arc<ProductStore>,
}

impl EditProductView {
    pub fn new(api: Arc<dyn ProductApi>, store: Arc<ProductStore>) -> Self {
        Self { api, store }
    }

    /// The product to edit: the stored record for `id`, or a blank draft.
    ///
    /// Refreshes the type catalog alongside.
    pub async fn load(&self, id: Option<ProductId>) -> ApiResult<Product> {
        match id {
            Some(id) => {
                let ((), product) = tokio::join!(self.store.fetch_product_types(), self.api.get_product(id));
                Ok(product?.into_body())
            }
            None => {
                self.store.fetch_product_types().await;
                Ok(Product::draft())
            }
        }
    }

    /// Choices for the type selector.
    pub fn type_options(&self) -> Vec<ProductType> {
        self.store.product_types()
    }

    /// Create the product if it is a draft, update it otherwise.
    pub async fn save(&self, product: &Product) -> ApiResult<Product> {
        let saved = match product.id {
            None => self.api.create_product(product).await?,
            Some(id) => self.api.update_product(id, product).await?,
        };
        tracing::info!(id = ?saved.body.id, status = %saved.status, "product saved");
        Ok(saved.into_body())
    }

    /// Upload an image and point the product at it.
    pub async fn attach_image(&self, product: &mut Product, file_name: &str, bytes: Vec<u8>) -> ApiResult<()> {
        let uploaded = self.api.upload_image(file_name, bytes).await?.into_body();
        product.image_path = uploaded.url;
        Ok(())
    }
}
