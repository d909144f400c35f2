#![allow(dead_code)]
//! Shared test doubles: collaborators whose responses are released manually,
//! letting tests resolve concurrent requests out of order.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use admin_console::api::{ApiResult, BoxFuture, DetailSource, ListQuery, ListSource};
use admin_console::domain::user::{User, UserStatus};
use admin_console::pagination::ListResult;

type ListReply<T> = oneshot::Sender<ApiResult<ListResult<T>>>;
type DetailReply<T> = oneshot::Sender<ApiResult<Option<T>>>;

/// List source that parks every request until the test releases it.
pub struct GatedListSource<T> {
    pending: Mutex<Vec<(ListQuery, ListReply<T>)>>,
}

impl<T> GatedListSource<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            pending: Mutex::new(Vec::new()),
        })
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn query_at(&self, index: usize) -> ListQuery {
        self.pending.lock().unwrap()[index].0.clone()
    }

    /// Resolves the pending request at `index` with `response`.
    pub fn release(&self, index: usize, response: ApiResult<ListResult<T>>) {
        let (_query, reply) = self.pending.lock().unwrap().remove(index);
        let _ = reply.send(response);
    }
}

impl<T: Send + 'static> ListSource<T> for GatedListSource<T> {
    fn fetch_page<'a>(&'a self, query: &'a ListQuery) -> BoxFuture<'a, ApiResult<ListResult<T>>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push((query.clone(), tx));
        Box::pin(async move { rx.await.expect("gated response dropped") })
    }
}

/// Detail source that parks every request until the test releases it.
pub struct GatedDetailSource<T> {
    pending: Mutex<Vec<(String, DetailReply<T>)>>,
}

impl<T> GatedDetailSource<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            pending: Mutex::new(Vec::new()),
        })
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn id_at(&self, index: usize) -> String {
        self.pending.lock().unwrap()[index].0.clone()
    }

    pub fn release(&self, index: usize, response: ApiResult<Option<T>>) {
        let (_id, reply) = self.pending.lock().unwrap().remove(index);
        let _ = reply.send(response);
    }
}

impl<T: Send + 'static> DetailSource<T> for GatedDetailSource<T> {
    fn fetch_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<Option<T>>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push((id.to_string(), tx));
        Box::pin(async move { rx.await.expect("gated response dropped") })
    }
}

/// Spins the current-thread runtime until `ready` holds.
pub async fn wait_until(mut ready: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if ready() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition never reached");
}

/// Fabricates `n` users with cycling statuses for in-memory list tests.
pub fn make_users(n: usize) -> Vec<User> {
    let registered_at: DateTime<Utc> = "2023-05-12T14:32:45Z".parse().unwrap();
    (1..=n)
        .map(|i| User {
            id: format!("0xWALLET{i:04}"),
            username: format!("user_{i:02}"),
            full_name: format!("Full Name {i}"),
            country: "United States".to_string(),
            registered_at,
            status: match i % 3 {
                0 => UserStatus::Active,
                1 => UserStatus::Inactive,
                _ => UserStatus::Disabled,
            },
        })
        .collect()
}
