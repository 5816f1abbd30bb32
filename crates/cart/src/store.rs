//! Cart state container.
//!
//! [`CartStore`] owns the canonical in-memory list of cart lines. Every
//! mutation runs to completion in three steps: update the list, persist the
//! full snapshot under the configured key, then publish the snapshot to
//! subscribers. The lock around the list is held across all three steps, so
//! mutations are sequenced and subscribers never observe a state that has
//! not yet been handed to storage.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pocketmarket_core::{CartItem, NewCartItem, ProductId};
use rust_decimal::Decimal;
use tokio::sync::{Mutex, RwLock};

use crate::config::CartConfig;
use crate::storage::CartStorage;

/// Callback invoked with each new cart snapshot.
type Listener = Box<dyn Fn(&[CartItem]) + Send + Sync>;

/// Identifies a subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Shopping cart state container.
///
/// Cheaply cloneable; clones share the same collection, storage backend and
/// subscribers, so any number of UI collaborators can hold a handle.
pub struct CartStore<S> {
    inner: Arc<CartStoreInner<S>>,
}

struct CartStoreInner<S> {
    storage: S,
    key: String,
    items: Mutex<Vec<CartItem>>,
    listeners: RwLock<Vec<(ListenerId, Listener)>>,
    next_listener_id: AtomicU64,
}

impl<S> Clone for CartStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CartStorage> CartStore<S> {
    /// Open a store over `storage`, loading the last persisted snapshot.
    ///
    /// A missing, unreadable or unparsable snapshot starts the session with
    /// an empty cart; the failure is logged and never propagated, since cart
    /// usability must not depend on storage availability.
    pub async fn open(storage: S, config: &CartConfig) -> Self {
        let key = config.products_key();

        let items = match storage.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("Discarding unparsable cart snapshot under {key}: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load cart snapshot under {key}: {e}");
                Vec::new()
            }
        };

        Self {
            inner: Arc::new(CartStoreInner {
                storage,
                key,
                items: Mutex::new(items),
                listeners: RwLock::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current cart snapshot, in display order.
    pub async fn products(&self) -> Vec<CartItem> {
        self.inner.items.lock().await.clone()
    }

    /// Number of units across all lines.
    pub async fn total_quantity(&self) -> u32 {
        self.inner.items.lock().await.iter().map(|item| item.quantity).sum()
    }

    /// Sum of all line totals.
    pub async fn subtotal(&self) -> Decimal {
        self.inner
            .items
            .lock()
            .await
            .iter()
            .map(CartItem::line_total)
            .sum()
    }

    /// Add `candidate` to the cart and return the new snapshot.
    ///
    /// A product not yet in the cart is inserted with quantity 1. A product
    /// already in the cart has its quantity raised by 1 instead; the stored
    /// title, image and price stay as first inserted and the candidate's
    /// copies are discarded. Repeated calls with the same id monotonically
    /// raise the quantity and never fail.
    pub async fn add_to_cart(&self, candidate: NewCartItem) -> Vec<CartItem> {
        let mut items = self.inner.items.lock().await;

        match items.iter_mut().find(|item| item.id == candidate.id) {
            Some(existing) => existing.quantity += 1,
            None => items.push(candidate.into_line()),
        }

        self.commit(&items).await
    }

    /// Raise the quantity of the line with `id` by 1 and return the new
    /// snapshot. The line keeps its position.
    ///
    /// An id that is not in the cart is a no-op: nothing is fabricated or
    /// persisted, and the current snapshot is returned unchanged.
    pub async fn increment(&self, id: &ProductId) -> Vec<CartItem> {
        let mut items = self.inner.items.lock().await;

        let Some(item) = items.iter_mut().find(|item| &item.id == id) else {
            tracing::debug!("Ignoring increment for product {id} not in the cart");
            return items.clone();
        };
        item.quantity += 1;

        self.commit(&items).await
    }

    /// Lower the quantity of the line with `id` by 1 and return the new
    /// snapshot. A line at quantity 1 is removed entirely; there is no
    /// "present with quantity 0" state.
    ///
    /// An id that is not in the cart is a no-op, same as [`Self::increment`].
    pub async fn decrement(&self, id: &ProductId) -> Vec<CartItem> {
        let mut items = self.inner.items.lock().await;

        match items.iter_mut().find(|item| &item.id == id) {
            Some(item) if item.quantity > 1 => item.quantity -= 1,
            Some(_) => items.retain(|item| &item.id != id),
            None => {
                tracing::debug!("Ignoring decrement for product {id} not in the cart");
                return items.clone();
            }
        }

        self.commit(&items).await
    }

    /// Register `listener` to be called with each post-mutation snapshot.
    ///
    /// Listeners run synchronously on the mutating task, after the snapshot
    /// has been handed to storage. They must return quickly and must not
    /// call back into the store.
    pub async fn subscribe(
        &self,
        listener: impl Fn(&[CartItem]) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .write()
            .await
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Unknown ids are ignored.
    pub async fn unsubscribe(&self, id: ListenerId) {
        self.inner
            .listeners
            .write()
            .await
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Persist the full snapshot, then publish it to subscribers.
    ///
    /// A failed write is logged at warning level and otherwise ignored: the
    /// in-memory collection stays authoritative for the session.
    async fn commit(&self, items: &[CartItem]) -> Vec<CartItem> {
        match serde_json::to_string(items) {
            Ok(encoded) => {
                if let Err(e) = self.inner.storage.set(&self.inner.key, &encoded).await {
                    tracing::warn!(
                        "Failed to persist cart snapshot under {}: {e}",
                        self.inner.key
                    );
                }
            }
            Err(e) => tracing::warn!("Failed to encode cart snapshot: {e}"),
        }

        let snapshot = items.to_vec();
        for (_, listener) in self.inner.listeners.read().await.iter() {
            listener(&snapshot);
        }
        snapshot
    }
}
