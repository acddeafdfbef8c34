//! Stale-response discard for overlapping asynchronous requests
//!
//! Every request is started under a [`RequestTicket`]. Starting a newer request
//! on the same [`RequestTracker`] cancels the previous ticket, and a result is
//! only published while its ticket is still the current one. A late response
//! for an old filter state or title therefore never overwrites a newer one.

use dashmap::DashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Handle identifying one in-flight request
#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    token: CancellationToken,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a newer request has been started on the same tracker
    pub fn is_superseded(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }
}

#[derive(Debug)]
struct TrackerState {
    generation: u64,
    token: CancellationToken,
}

/// Generation counter paired with a cancellation token per request
#[derive(Debug)]
pub struct RequestTracker {
    state: Mutex<TrackerState>,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TrackerState {
                generation: 0,
                token: CancellationToken::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        // The state is two plain fields, a poisoned lock still holds consistent data
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a new request, superseding whatever was in flight
    pub fn begin(&self) -> RequestTicket {
        let mut state = self.lock();
        state.token.cancel();
        state.generation += 1;
        state.token = CancellationToken::new();

        RequestTicket {
            generation: state.generation,
            token: state.token.clone(),
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        let state = self.lock();
        !ticket.is_superseded() && state.generation == ticket.generation
    }

    /// Cancel the in-flight request without starting a new one
    pub fn cancel_current(&self) {
        self.lock().token.cancel();
    }

    pub fn current_generation(&self) -> u64 {
        self.lock().generation
    }
}

/// Holds the most recent published result of a repeatedly issued request
pub struct LatestSlot<T> {
    tracker: RequestTracker,
    value: RwLock<Option<T>>,
}

impl<T> Default for LatestSlot<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestSlot<T>
where
    T: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            tracker: RequestTracker::new(),
            value: RwLock::new(None),
        }
    }

    /// Supersede any in-flight request and capture a ticket for the next one
    pub fn begin(&self) -> RequestTicket {
        self.tracker.begin()
    }

    /// Start a request and publish its output unless a newer one was started meanwhile
    ///
    /// Returns `None` when the result was discarded as stale.
    pub async fn run<F>(&self, operation: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.begin();
        self.run_with_ticket(ticket, operation).await
    }

    /// Like [`LatestSlot::run`] for a ticket captured earlier with [`LatestSlot::begin`]
    pub async fn run_with_ticket<F>(&self, ticket: RequestTicket, operation: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let output = tokio::select! {
            _ = ticket.cancellation_token().cancelled() => {
                log::debug!("Request generation {} superseded before completion", ticket.generation());
                return None;
            }
            output = operation => output,
        };

        // Check under the write lock so a newer publish cannot be overwritten
        let mut slot = self.value.write().await;
        if !self.tracker.is_current(&ticket) {
            log::debug!("Discarding stale result of generation {}", ticket.generation());
            return None;
        }

        *slot = Some(output.clone());
        Some(output)
    }

    /// Most recently published value
    pub async fn current(&self) -> Option<T> {
        self.value.read().await.clone()
    }

    /// Drop the published value and cancel anything in flight
    pub async fn clear(&self) {
        self.tracker.cancel_current();
        *self.value.write().await = None;
    }

    pub fn generation(&self) -> u64 {
        self.tracker.current_generation()
    }
}

/// Independent [`LatestSlot`]s keyed by the thing being displayed
///
/// Requests for different keys never supersede each other. Slots are never
/// evicted on their own: callers drop keys that left the screen with
/// [`KeyedLatestSlots::remove`] or [`KeyedLatestSlots::retain`].
pub struct KeyedLatestSlots<K, T>
where
    K: Eq + Hash,
{
    slots: DashMap<K, Arc<LatestSlot<T>>>,
}

impl<K, T> Default for KeyedLatestSlots<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> KeyedLatestSlots<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    pub fn slot(&self, key: &K) -> Arc<LatestSlot<T>> {
        self.slots
            .entry(key.clone())
            .or_insert_with(|| Arc::new(LatestSlot::new()))
            .clone()
    }

    pub async fn run<F>(&self, key: &K, operation: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        // Clone the Arc out so no map guard is held across the await
        let slot = self.slot(key);
        slot.run(operation).await
    }

    pub async fn current(&self, key: &K) -> Option<T> {
        let slot = self.slots.get(key).map(|entry| Arc::clone(entry.value()))?;
        slot.current().await
    }

    /// Forget a key, cancelling its in-flight request
    pub fn remove(&self, key: &K) {
        if let Some((_, slot)) = self.slots.remove(key) {
            slot.tracker.cancel_current();
        }
    }

    /// Keep only the keys accepted by `keep`, cancelling the others
    pub fn retain<F>(&self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.slots.retain(|key, slot| {
            let kept = keep(key);
            if !kept {
                slot.tracker.cancel_current();
            }
            kept
        });
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
