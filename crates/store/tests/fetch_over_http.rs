use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::json;

use prodman_client::{ClientConfig, HttpProductApi};
use prodman_core::ProductType;
use prodman_store::{ProductStore, StoreEvent};

async fn spawn_backend(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

fn store_for(base_url: String) -> Arc<ProductStore> {
    let config = ClientConfig::new(base_url, Duration::from_secs(1)).unwrap();
    let api = Arc::new(HttpProductApi::new(&config).unwrap());
    ProductStore::shared(api)
}

#[tokio::test]
async fn fetch_populates_catalog_from_backend() {
    let app = Router::new().route(
        "/api/product/type",
        get(|| async { Json(json!({"types": [{"id": 1, "name": "Electronics"}]})) }),
    );
    let (base_url, handle) = spawn_backend(app).await;
    let store = store_for(base_url);

    store.fetch_product_types().await;

    assert_eq!(
        store.product_types(),
        vec![ProductType::new(json!({"id": 1, "name": "Electronics"}))]
    );
    handle.abort();
}

#[tokio::test]
async fn body_without_types_is_treated_as_failure() {
    let app = Router::new().route(
        "/api/product/type",
        get(|| async { Json(json!({"categories": []})) }),
    );
    let (base_url, handle) = spawn_backend(app).await;
    let store = store_for(base_url);
    store.commit_product_types(vec![ProductType::from("Books")]);

    store.fetch_product_types().await;

    assert_eq!(store.product_types(), vec![ProductType::from("Books")]);
    handle.abort();
}

#[tokio::test]
async fn network_error_is_swallowed_and_reported() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = store_for(format!("http://{}", addr));
    store.commit_product_types(vec![ProductType::from("Toys")]);
    let mut events = store.subscribe();

    // Fire and forget, then wait for the outcome through the event stream.
    let _ = store.spawn_fetch_product_types();
    let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("fetch did not settle")
        .unwrap();

    assert!(matches!(event, StoreEvent::ProductTypesFetchFailed { .. }));
    assert_eq!(store.product_types(), vec![ProductType::from("Toys")]);
}
