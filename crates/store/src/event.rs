//! Notifications published by the store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Correlates one `fetch_product_types` invocation across logs and events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FetchId(Uuid);

impl FetchId {
    /// UUIDv7, so ids sort by issue time.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for FetchId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for FetchId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// What happened to the cached catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The catalog was replaced. `fetch_id` is `None` for direct commits.
    ProductTypesCommitted {
        fetch_id: Option<FetchId>,
        count: usize,
        at: DateTime<Utc>,
    },
    /// A fetch failed; the cached catalog was left as it was.
    ProductTypesFetchFailed {
        fetch_id: FetchId,
        error: String,
        at: DateTime<Utc>,
    },
}

impl StoreEvent {
    pub fn fetch_id(&self) -> Option<FetchId> {
        match self {
            StoreEvent::ProductTypesCommitted { fetch_id, .. } => *fetch_id,
            StoreEvent::ProductTypesFetchFailed { fetch_id, .. } => Some(*fetch_id),
        }
    }
}
