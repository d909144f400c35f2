//! In-memory collaborator used by tests and the probe's offline mode.
//!
//! Applies the same search/filter semantics the live backend applies
//! server-side, via [`Searchable`], then slices out the requested page.

use std::sync::{Mutex, MutexGuard};

use crate::api::{
    ApiError, ApiResult, BoxFuture, DetailSource, ListQuery, ListSource, TaskWriter,
};
use crate::domain::task::{NewTask, Task, UpdateTask};
use crate::domain::transaction::{Reward, Trade};
use crate::domain::user::{User, UserDetails};
use crate::domain::{Record, Searchable};
use crate::pagination::ListResult;

#[derive(Default)]
pub struct InMemoryApi {
    users: Mutex<Vec<User>>,
    user_details: Mutex<Vec<UserDetails>>,
    tasks: Mutex<Vec<Task>>,
    trades: Mutex<Vec<Trade>>,
    rewards: Mutex<Vec<Reward>>,
    next_task_seq: Mutex<u32>,
}

impl InMemoryApi {
    pub fn with_users(self, users: Vec<User>) -> Self {
        *lock(&self.users) = users;
        self
    }

    pub fn with_user_details(self, details: Vec<UserDetails>) -> Self {
        *lock(&self.user_details) = details;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *lock(&self.next_task_seq) = tasks.len() as u32;
        *lock(&self.tasks) = tasks;
        self
    }

    pub fn with_trades(self, trades: Vec<Trade>) -> Self {
        *lock(&self.trades) = trades;
        self
    }

    pub fn with_rewards(self, rewards: Vec<Reward>) -> Self {
        *lock(&self.rewards) = rewards;
        self
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

fn page_of<T>(records: &[T], query: &ListQuery) -> ListResult<T>
where
    T: Clone + Searchable,
{
    let matching: Vec<&T> = records
        .iter()
        .filter(|r| query.search.is_empty() || r.matches_search(&query.search))
        .filter(|r| query.filter.as_deref().is_none_or(|f| r.matches_filter(f)))
        .collect();

    let total = matching.len();
    let start = (query.page - 1).saturating_mul(query.per_page);
    let items = matching
        .into_iter()
        .skip(start)
        .take(query.per_page)
        .cloned()
        .collect();

    ListResult::new(items, query.page, query.per_page, total)
}

macro_rules! memory_list_source {
    ($entity:ty, $field:ident) => {
        impl ListSource<$entity> for InMemoryApi {
            fn fetch_page<'a>(
                &'a self,
                query: &'a ListQuery,
            ) -> BoxFuture<'a, ApiResult<ListResult<$entity>>> {
                Box::pin(async move { Ok(page_of(&lock(&self.$field), query)) })
            }
        }
    };
}

memory_list_source!(User, users);
memory_list_source!(Task, tasks);
memory_list_source!(Trade, trades);
memory_list_source!(Reward, rewards);

impl DetailSource<UserDetails> for InMemoryApi {
    fn fetch_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<Option<UserDetails>>> {
        Box::pin(async move {
            Ok(lock(&self.user_details)
                .iter()
                .find(|d| d.id() == id)
                .cloned())
        })
    }
}

impl TaskWriter for InMemoryApi {
    fn create_task<'a>(&'a self, new_task: &'a NewTask) -> BoxFuture<'a, ApiResult<Task>> {
        Box::pin(async move {
            let mut seq = lock(&self.next_task_seq);
            *seq += 1;
            let task = Task {
                id: format!("TASK-{:03}", *seq),
                task_type: new_task.task_type,
                reward_amount: new_task.reward_amount,
                description: new_task.description.clone(),
                link: new_task.link.clone(),
                is_active: true,
            };
            lock(&self.tasks).push(task.clone());
            Ok(task)
        })
    }

    fn update_task<'a>(
        &'a self,
        id: &'a str,
        updates: &'a UpdateTask,
    ) -> BoxFuture<'a, ApiResult<Task>> {
        Box::pin(async move {
            let mut tasks = lock(&self.tasks);
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(ApiError::NotFound)?;
            task.task_type = updates.task_type;
            task.reward_amount = updates.reward_amount;
            task.description = updates.description.clone();
            task.link = updates.link.clone();
            task.is_active = updates.is_active;
            Ok(task.clone())
        })
    }

    fn delete_task<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<()>> {
        Box::pin(async move {
            let mut tasks = lock(&self.tasks);
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() == before {
                return Err(ApiError::NotFound);
            }
            Ok(())
        })
    }
}
