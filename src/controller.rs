//! List-view data controller: owns the authoritative query/result pair for
//! one view and mediates every fetch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::api::{ApiError, ListQuery, ListSource};
use crate::pagination::{self, ListResult, PAGE_SIZES, PageControl};

/// Observable snapshot of a list view.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub query: ListQuery,
    /// Last successfully fetched page; kept through failed refreshes.
    pub result: Option<ListResult<T>>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// Drives one paginated, searchable list view against a [`ListSource`].
///
/// Every view owns exactly one controller instance. Interior state sits
/// behind a mutex that is never held across an await; every outgoing request
/// carries a sequence number so that only the response to the most recently
/// issued request is committed (last-request-wins).
pub struct ListController<T, S> {
    source: S,
    seq: AtomicU64,
    state: Mutex<ListState<T>>,
}

impl<T, S> ListController<T, S>
where
    T: Clone,
    S: ListSource<T>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            seq: AtomicU64::new(0),
            state: Mutex::new(ListState {
                query: ListQuery::default(),
                result: None,
                loading: false,
                error: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListState<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> ListState<T> {
        self.lock().clone()
    }

    pub fn query(&self) -> ListQuery {
        self.lock().query.clone()
    }

    pub fn result(&self) -> Option<ListResult<T>> {
        self.lock().result.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn error(&self) -> Option<ApiError> {
        self.lock().error.clone()
    }

    /// Page-button layout for the last known result; just a disabled
    /// prev/next pair before the first load.
    pub fn page_controls(&self) -> Vec<PageControl> {
        let state = self.lock();
        match &state.result {
            Some(result) => result.controls(),
            None => pagination::page_window(1, 0),
        }
    }

    /// Replaces the search term and rewinds to the first page without
    /// fetching, so typing does not cause a request storm. Call
    /// [`commit_search`](Self::commit_search) on submit.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.lock();
        state.query = state.query.clone().paginate(1, state.query.per_page).search(term);
    }

    /// Fetches with the current query; the submit half of a search.
    pub async fn commit_search(&self) {
        self.refresh().await;
    }

    /// Replaces the enumerated filter, rewinds to the first page and fetches.
    pub async fn set_filter(&self, filter: Option<String>) {
        {
            let mut state = self.lock();
            let mut query = state.query.clone();
            query.page = 1;
            query.filter = filter;
            state.query = query;
        }
        self.refresh().await;
    }

    /// Switches the page size and rewinds to the first page. Values outside
    /// [`PAGE_SIZES`] are ignored.
    pub async fn set_page_size(&self, per_page: usize) {
        if !PAGE_SIZES.contains(&per_page) {
            log::warn!("ignoring unsupported page size {per_page}");
            return;
        }
        {
            let mut state = self.lock();
            state.query = state.query.clone().paginate(1, per_page);
        }
        self.refresh().await;
    }

    /// Navigates to page `n`, leaving search and filter untouched. Ignored
    /// when `n` is out of range for the last known result, or before the
    /// first load.
    pub async fn go_to_page(&self, n: usize) {
        {
            let mut state = self.lock();
            let pages = match &state.result {
                Some(result) => result.pages,
                None => return,
            };
            if n < 1 || n > pages {
                return;
            }
            let mut query = state.query.clone();
            query.page = n;
            state.query = query;
        }
        self.refresh().await;
    }

    /// Fetches the current query from the collaborator.
    ///
    /// On success the result is replaced wholesale and any prior error is
    /// cleared. On failure the previous result stays on screen and the error
    /// is recorded. A response that was superseded by a newer request is
    /// discarded without touching state.
    pub async fn refresh(&self) {
        let (ticket, query) = {
            let mut state = self.lock();
            state.loading = true;
            let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
            (ticket, state.query.clone())
        };

        let outcome = self.source.fetch_page(&query).await;

        let mut state = self.lock();
        if self.seq.load(Ordering::SeqCst) != ticket {
            // a newer request owns the view now
            return;
        }
        state.loading = false;
        match outcome {
            Ok(result) => {
                state.result = Some(result);
                state.error = None;
            }
            Err(err) => {
                log::warn!("list fetch failed: {err}");
                state.error = Some(err);
            }
        }
    }
}
