//! Product records and the response bodies of the product endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::ProductId;

/// A product record as exchanged with the backend.
///
/// Every field defaults when absent so partial payloads still decode. `id` is
/// `None` for drafts that have not been created yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub price: f64,
    pub description: String,
    pub image_path: String,
}

impl Product {
    /// Blank draft for the edit view.
    pub fn draft() -> Self {
        Self::default()
    }

    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }
}

/// A product type (category) record.
///
/// The shape is owned by the server: the reference backend sends plain strings,
/// other deployments send objects such as `{"id": 1, "name": "Books"}`. The
/// value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductType(Value);

impl ProductType {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Human-readable label: the string itself, or the `name` field of an
    /// object, or the compact JSON text as a last resort.
    pub fn label(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Object(map) => match map.get("name") {
                Some(Value::String(name)) => name.clone(),
                _ => self.0.to_string(),
            },
            other => other.to_string(),
        }
    }
}

impl From<Value> for ProductType {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductType {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

/// Body of `GET /api/product`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
}

/// Body of `GET /api/product/type`.
///
/// `types` is required: a body without it is a decode failure, not an empty
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypes {
    pub types: Vec<ProductType>,
}

/// Body of `POST /api/product/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_uses_backend_field_names() {
        let product = Product {
            id: Some(ProductId::new(3)),
            name: "Lamp".to_string(),
            product_type: "Furniture".to_string(),
            price: 19.5,
            description: "desk lamp".to_string(),
            image_path: "/static/lamp.png".to_string(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], json!(3));
        assert_eq!(value["type"], json!("Furniture"));
        assert_eq!(value["image_path"], json!("/static/lamp.png"));
    }

    #[test]
    fn draft_omits_id() {
        let value = serde_json::to_value(Product::draft()).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn partial_product_payload_decodes() {
        let product: Product = serde_json::from_value(json!({"id": 9, "name": "Pen"})).unwrap();
        assert_eq!(product.id, Some(ProductId::new(9)));
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 0.0);
        assert!(!product.is_draft());
    }

    #[test]
    fn product_types_keep_server_shape_and_order() {
        let body: ProductTypes = serde_json::from_value(json!({
            "types": ["Electronics", {"id": 2, "name": "Books"}, 7]
        }))
        .unwrap();

        assert_eq!(body.types.len(), 3);
        assert_eq!(body.types[0].label(), "Electronics");
        assert_eq!(body.types[1].label(), "Books");
        assert_eq!(body.types[2].label(), "7");
        assert_eq!(body.types[1].as_value(), &json!({"id": 2, "name": "Books"}));
    }

    #[test]
    fn product_types_body_requires_types_field() {
        let res = serde_json::from_value::<ProductTypes>(json!({"kinds": []}));
        assert!(res.is_err());
    }

    #[test]
    fn product_page_defaults_missing_fields() {
        let page: ProductPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, 0);
    }
}
