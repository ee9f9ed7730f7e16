//! The product-type store: fetch, commit, read.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::Instrument;

use prodman_client::ProductTypesApi;
use prodman_core::ProductType;

use crate::event::{FetchId, StoreEvent};
use crate::state::StoreState;

const EVENT_CAPACITY: usize = 64;

/// Holds the cached product-type catalog.
///
/// Concurrent fetches are not coordinated: each one commits when its response
/// arrives, so the fetch that *resolves* last decides the cached value, no
/// matter which was issued first.
pub struct ProductStore {
    api: Arc<dyn ProductTypesApi>,
    state: RwLock<StoreState>,
    events: broadcast::Sender<StoreEvent>,
}

impl ProductStore {
    pub fn new(api: Arc<dyn ProductTypesApi>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            api,
            state: RwLock::new(StoreState::new()),
            events,
        }
    }

    /// Convenience constructor for the usual `Arc`-shared store.
    pub fn shared(api: Arc<dyn ProductTypesApi>) -> Arc<Self> {
        Arc::new(Self::new(api))
    }

    /// Current catalog. Never triggers a fetch.
    pub fn product_types(&self) -> Vec<ProductType> {
        self.read_state().product_types().to_vec()
    }

    /// `true` once any commit has happened.
    pub fn is_populated(&self) -> bool {
        self.read_state().is_populated()
    }

    /// Snapshot of the whole state.
    pub fn snapshot(&self) -> StoreState {
        self.read_state().clone()
    }

    /// Subscribe to commit/failure notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Replace the cached catalog wholesale.
    ///
    /// This is the only mutator of the catalog.
    pub fn commit_product_types(&self, types: Vec<ProductType>) {
        self.commit(None, types);
    }

    /// Fetch the catalog and commit it.
    ///
    /// Failures are logged and published as [`StoreEvent::ProductTypesFetchFailed`];
    /// the cached value stays as it was and nothing reaches the caller.
    pub async fn fetch_product_types(&self) {
        let fetch_id = FetchId::new();
        let span = tracing::info_span!("fetch_product_types", %fetch_id);

        async {
            match self.api.list_product_types().await {
                Ok(resp) => self.commit(Some(fetch_id), resp.body.types),
                Err(err) => {
                    tracing::error!(error = %err, "Failed to fetch product types");
                    self.publish(StoreEvent::ProductTypesFetchFailed {
                        fetch_id,
                        error: err.to_string(),
                        at: Utc::now(),
                    });
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Fire-and-forget [`fetch_product_types`](Self::fetch_product_types) on the
    /// current tokio runtime.
    ///
    /// The handle may be dropped; the fetch still runs to completion.
    pub fn spawn_fetch_product_types(self: &Arc<Self>) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.fetch_product_types().await })
    }

    fn commit(&self, fetch_id: Option<FetchId>, types: Vec<ProductType>) {
        let count = types.len();
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.set_product_types(types);
        }
        tracing::debug!(count, "committed product types");
        self.publish(StoreEvent::ProductTypesCommitted {
            fetch_id,
            count,
            at: Utc::now(),
        });
    }

    fn publish(&self, event: StoreEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore")
            .field("state", &*self.read_state())
            .finish_non_exhaustive()
    }
}
