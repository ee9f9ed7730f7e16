//! The backend operations, as traits so callers can be driven by a fake
//! backend in tests.

use async_trait::async_trait;
use reqwest::StatusCode;

use prodman_core::{ListQuery, Product, ProductId, ProductPage, ProductTypes, UploadedImage};

use crate::error::ApiResult;

/// A successful response: HTTP status plus the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    /// `200 OK` with the given body.
    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

/// Type catalog lookup (`GET /api/product/type`).
#[async_trait]
pub trait ProductTypesApi: Send + Sync {
    async fn list_product_types(&self) -> ApiResult<ApiResponse<ProductTypes>>;
}

/// Product CRUD on top of the type catalog.
#[async_trait]
pub trait ProductApi: ProductTypesApi {
    /// `GET /api/product` with the query forwarded verbatim.
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ApiResponse<ProductPage>>;

    /// `GET /api/product/{id}`.
    async fn get_product(&self, id: ProductId) -> ApiResult<ApiResponse<Product>>;

    /// `POST /api/product`.
    async fn create_product(&self, product: &Product) -> ApiResult<ApiResponse<Product>>;

    /// `PUT /api/product/{id}`.
    async fn update_product(&self, id: ProductId, product: &Product) -> ApiResult<ApiResponse<Product>>;

    /// `DELETE /api/product/{id}`.
    async fn delete_product(&self, id: ProductId) -> ApiResult<ApiResponse<()>>;

    /// `POST /api/product/upload` (multipart field `file`).
    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<ApiResponse<UploadedImage>>;
}
