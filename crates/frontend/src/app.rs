//! Application bootstrap and navigation.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use prodman_client::{ApiError, ClientConfig, HttpProductApi, ProductApi};
use prodman_core::{DomainError, ListQuery, Product, ProductId, ProductPage, ProductType};
use prodman_store::ProductStore;

use crate::routes::{self, View};
use crate::views::{EditProductView, ProductListView};

/// Shared application state handed to the views.
///
/// Created once at startup; dropping it tears the cache down.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ProductApi>,
    pub store: Arc<ProductStore>,
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no view is mounted at `{0}`")]
    UnknownRoute(String),
    #[error("invalid view parameter: {0}")]
    InvalidParameter(#[from] DomainError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// What a view produced on load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Rendered {
    ProductList {
        page: ProductPage,
        product_types: Vec<ProductType>,
    },
    EditProduct {
        product: Product,
        product_types: Vec<ProductType>,
    },
}

impl AppState {
    /// Build the HTTP client from `config` and an empty store on top of it.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let api = Arc::new(HttpProductApi::new(config)?);
        tracing::info!(base_url = %api.base_url(), "Initializing AppState");
        Ok(Self::with_api(api))
    }

    /// Wire the views to any backend implementation.
    pub fn with_api<A>(api: Arc<A>) -> Self
    where
        A: ProductApi + 'static,
    {
        let store = ProductStore::shared(api.clone());
        Self { api, store }
    }

    pub fn product_list(&self) -> ProductListView {
        ProductListView::new(self.api.clone(), self.store.clone())
    }

    pub fn edit_product(&self) -> EditProductView {
        EditProductView::new(self.api.clone(), self.store.clone())
    }

    /// Navigate to `path` and load its view.
    ///
    /// Query-string pairs on `path` are merged with `params`; explicit
    /// `params` win. The list view forwards every parameter to the backend; the
    /// edit view reads `id`.
    pub async fn open(&self, path: &str, params: ListQuery) -> Result<Rendered, OpenError> {
        let view = routes::resolve(path).ok_or_else(|| OpenError::UnknownRoute(path.to_string()))?;
        let (_, inline) = routes::split_query(path);
        let mut merged = ListQuery::from_pairs(inline)?;
        merged.merge(params);
        let params = merged;

        tracing::debug!(?view, path, "opening view");
        match view {
            View::ProductList => {
                let list = self.product_list();
                let page = list.load(&params).await?;
                Ok(Rendered::ProductList {
                    page,
                    product_types: list.type_filter_options(),
                })
            }
            View::EditProduct => {
                let id = params
                    .get("id")
                    .map(|v| v.to_string().parse::<ProductId>())
                    .transpose()?;
                let edit = self.edit_product();
                let product = edit.load(id).await?;
                Ok(Rendered::EditProduct {
                    product,
                    product_types: edit.type_options(),
                })
            }
        }
    }
}
