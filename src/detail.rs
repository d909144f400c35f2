//! Detail lookup for a single entity addressed by a navigation parameter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::api::DetailSource;

/// Lifecycle of a detail view.
///
/// `Loading` and `NotFound` are distinct on purpose: "still fetching" must
/// never read as "does not exist".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState<T> {
    /// No identifier observed; the detail view is closed.
    Idle,
    Loading,
    Found(T),
    NotFound,
}

impl<T> DetailState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DetailState::NotFound)
    }

    pub fn entity(&self) -> Option<&T> {
        match self {
            DetailState::Found(entity) => Some(entity),
            _ => None,
        }
    }
}

/// Resolves one entity by identifier, independent of any list's pagination.
///
/// Driven by an externally-owned address parameter; the lookup observes
/// changes and requests fetches, it never owns navigation.
pub struct DetailLookup<T, S> {
    source: S,
    seq: AtomicU64,
    state: Mutex<DetailState<T>>,
}

impl<T, S> DetailLookup<T, S>
where
    T: Clone,
    S: DetailSource<T>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            seq: AtomicU64::new(0),
            state: Mutex::new(DetailState::Idle),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DetailState<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> DetailState<T> {
        self.lock().clone()
    }

    /// Reacts to a change of the address parameter.
    ///
    /// A fresh identifier always passes through `Loading`, even when the same
    /// entity is already displayed, so the view reflects the latest request.
    /// Only the newest observation may commit; a slower superseded fetch is
    /// discarded. `None` closes the view.
    pub async fn observe(&self, id: Option<&str>) {
        let Some(id) = id else {
            self.reset();
            return;
        };

        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock() = DetailState::Loading;

        let outcome = self.source.fetch_by_id(id).await;

        let mut state = self.lock();
        if self.seq.load(Ordering::SeqCst) != ticket {
            return;
        }
        *state = match outcome {
            Ok(Some(entity)) => DetailState::Found(entity),
            Ok(None) => DetailState::NotFound,
            Err(err) => {
                log::warn!("detail fetch for {id} failed: {err}");
                DetailState::NotFound
            }
        };
    }

    /// Resets to `Idle`. Removing the identifier from the address itself is
    /// the owning view's concern.
    pub fn close(&self) {
        self.reset();
    }

    fn reset(&self) {
        // invalidate any in-flight fetch before clearing
        self.seq.fetch_add(1, Ordering::SeqCst);
        *self.lock() = DetailState::Idle;
    }
}
