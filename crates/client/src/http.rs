//! `reqwest`-backed implementation of the product API.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use prodman_core::{ListQuery, Product, ProductId, ProductPage, ProductTypes, UploadedImage};

use crate::api::{ApiResponse, ProductApi, ProductTypesApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

const PRODUCT_PATH: &str = "/api/product";

/// HTTP client bound to one backend origin.
///
/// The timeout from [`ClientConfig`] applies to every request as a whole
/// (connect, send and body read).
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "backend request");
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    fn item_path(id: ProductId) -> String {
        format!("{PRODUCT_PATH}/{id}")
    }

    /// Send the request and decode a JSON body on success.
    async fn send_json<T>(&self, req: RequestBuilder) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let resp = check_status(req.send().await?).await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let body = serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }

    /// Send the request and ignore whatever body comes back.
    async fn send_discarding(&self, req: RequestBuilder) -> ApiResult<ApiResponse<()>> {
        let resp = check_status(req.send().await?).await?;
        Ok(ApiResponse::new(resp.status(), ()))
    }
}

/// Turn a non-2xx response into [`ApiError::Status`].
///
/// The message is the backend's `{"error": "..."}` field when present,
/// otherwise the raw body text.
async fn check_status(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(text);

    tracing::warn!(%status, %message, "backend returned an error status");
    Err(ApiError::Status { status, message })
}

#[async_trait]
impl ProductTypesApi for HttpProductApi {
    async fn list_product_types(&self) -> ApiResult<ApiResponse<ProductTypes>> {
        let req = self.request(Method::GET, &format!("{PRODUCT_PATH}/type"));
        self.send_json(req).await
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ApiResponse<ProductPage>> {
        let req = self.request(Method::GET, PRODUCT_PATH).query(&query.pairs());
        self.send_json(req).await
    }

    async fn get_product(&self, id: ProductId) -> ApiResult<ApiResponse<Product>> {
        let req = self.request(Method::GET, &Self::item_path(id));
        self.send_json(req).await
    }

    async fn create_product(&self, product: &Product) -> ApiResult<ApiResponse<Product>> {
        let req = self.request(Method::POST, PRODUCT_PATH).json(product);
        self.send_json(req).await
    }

    async fn update_product(&self, id: ProductId, product: &Product) -> ApiResult<ApiResponse<Product>> {
        let req = self.request(Method::PUT, &Self::item_path(id)).json(product);
        self.send_json(req).await
    }

    async fn delete_product(&self, id: ProductId) -> ApiResult<ApiResponse<()>> {
        let req = self.request(Method::DELETE, &Self::item_path(id));
        self.send_discarding(req).await
    }

    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<ApiResponse<UploadedImage>> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let req = self
            .request(Method::POST, &format!("{PRODUCT_PATH}/upload"))
            .multipart(form);
        self.send_json(req).await
    }
}
