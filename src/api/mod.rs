//! Remote API collaborator: query types, source traits and implementations.
//!
//! Controllers depend only on the traits here; the live backend
//! ([`http::HttpApi`]), the in-memory stand-in ([`memory::InMemoryApi`]) and
//! the test mocks all implement them.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub mod errors;
pub mod http;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod wire;

pub use errors::{ApiError, ApiResult};

use crate::domain::task::{NewTask, Task, UpdateTask};
use crate::pagination::{DEFAULT_PER_PAGE, ListResult};

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What the user currently wants from a list view: page, page size,
/// free-text search and the optional enumerated filter.
///
/// `search` is never null; the empty string means "no search".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub per_page: usize,
    pub search: String,
    pub filter: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            filter: None,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.max(1);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// List-fetch endpoint for one entity type.
pub trait ListSource<T>: Send + Sync {
    fn fetch_page<'a>(&'a self, query: &'a ListQuery) -> BoxFuture<'a, ApiResult<ListResult<T>>>;
}

/// Fetch-by-identifier endpoint. `Ok(None)` signals not-found.
pub trait DetailSource<T>: Send + Sync {
    fn fetch_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<Option<T>>>;
}

/// Create/update/delete endpoints for reward tasks.
pub trait TaskWriter: Send + Sync {
    fn create_task<'a>(&'a self, new_task: &'a NewTask) -> BoxFuture<'a, ApiResult<Task>>;
    fn update_task<'a>(
        &'a self,
        id: &'a str,
        updates: &'a UpdateTask,
    ) -> BoxFuture<'a, ApiResult<Task>>;
    fn delete_task<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<()>>;
}

impl<T, S> ListSource<T> for Arc<S>
where
    S: ListSource<T> + ?Sized,
{
    fn fetch_page<'a>(&'a self, query: &'a ListQuery) -> BoxFuture<'a, ApiResult<ListResult<T>>> {
        (**self).fetch_page(query)
    }
}

impl<T, S> DetailSource<T> for Arc<S>
where
    S: DetailSource<T> + ?Sized,
{
    fn fetch_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<Option<T>>> {
        (**self).fetch_by_id(id)
    }
}
