//! Query parameters for the product listing endpoint.
//!
//! The client does not interpret these: they are an ordered key → value
//! mapping that is forwarded to the backend as a query string. The typed
//! setters only name the parameters the reference backend understands.

use crate::error::{DomainError, DomainResult};

/// A single query parameter value (string or number).
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl core::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Integer(n) => write!(f, "{n}"),
            QueryValue::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Sort direction understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Passthrough parameters for `GET /api/product`.
///
/// Setting a key that is already present replaces its value in place, so the
/// original insertion order is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQuery {
    params: Vec<(String, QueryValue)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Overlay `other` on top of `self`; keys from `other` win.
    pub fn merge(&mut self, other: ListQuery) {
        for (key, value) in other.params {
            self.set(key, value);
        }
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    pub fn page_size(self, page_size: u32) -> Self {
        self.param("page_size", page_size)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.param("name", name.into())
    }

    pub fn product_type(self, product_type: impl Into<String>) -> Self {
        self.param("type", product_type.into())
    }

    pub fn price_min(self, price: f64) -> Self {
        self.param("price_min", price)
    }

    pub fn price_max(self, price: f64) -> Self {
        self.param("price_max", price)
    }

    pub fn sort_by(self, field: impl Into<String>) -> Self {
        self.param("sort_by", field.into())
    }

    pub fn sort_order(self, order: SortOrder) -> Self {
        self.param("sort_order", order.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Parameters rendered as string pairs, ready for URL encoding.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Parse `key=value` arguments (as given on a command line).
    ///
    /// Values that parse as integers or floats are kept as numbers; anything
    /// else is text.
    pub fn from_pairs<I, S>(args: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut query = Self::new();
        for arg in args {
            let arg = arg.as_ref();
            let (key, raw) = arg
                .split_once('=')
                .ok_or_else(|| DomainError::validation(format!("expected key=value, got `{arg}`")))?;
            if key.is_empty() {
                return Err(DomainError::validation(format!("empty key in `{arg}`")));
            }
            let value = if let Ok(n) = raw.parse::<i64>() {
                QueryValue::Integer(n)
            } else if let Ok(n) = raw.parse::<f64>() {
                QueryValue::Float(n)
            } else {
                QueryValue::Text(raw.to_string())
            };
            query.set(key, value);
        }
        Ok(query)
    }
}
