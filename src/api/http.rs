//! `reqwest`-backed implementation of the collaborator traits.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::api::wire::{DetailEnvelope, PageEnvelope};
use crate::api::{
    ApiError, ApiResult, BoxFuture, DetailSource, ListQuery, ListSource, TaskWriter,
};
use crate::config::ApiConfig;
use crate::domain::task::{NewTask, Task, UpdateTask};
use crate::domain::transaction::{Reward, Trade};
use crate::domain::user::{User, UserDetails};
use crate::pagination::ListResult;

/// Talks to the live platform API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    http: Arc<reqwest::Client>,
}

impl HttpApi {
    /// Creates a client targeting `base_url` with default transport settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Arc::new(reqwest::Client::new()),
        }
    }

    /// Creates a client from loaded configuration, applying its timeout.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: Arc::new(http),
        })
    }

    async fn get_page<T>(&self, path: &str, query: &ListQuery) -> ApiResult<ListResult<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("limit", query.per_page.to_string()),
        ];
        if !query.search.is_empty() {
            params.push(("search", query.search.clone()));
        }
        if let Some(filter) = &query.filter {
            params.push(("filter", filter.clone()));
        }

        log::debug!("fetching {url} page {}", query.page);

        let envelope: PageEnvelope<T> = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        Ok(envelope.into_result(query))
    }

    async fn get_detail<T>(&self, path: &str, id: &str) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}/{id}", self.base_url);

        log::debug!("fetching {url}");

        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: DetailEnvelope<T> = response
            .error_for_status()?
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(envelope.data)
    }
}

macro_rules! http_list_source {
    ($entity:ty, $path:expr) => {
        impl ListSource<$entity> for HttpApi {
            fn fetch_page<'a>(
                &'a self,
                query: &'a ListQuery,
            ) -> BoxFuture<'a, ApiResult<ListResult<$entity>>> {
                Box::pin(self.get_page($path, query))
            }
        }
    };
}

http_list_source!(User, "users");
http_list_source!(Task, "tasks");
http_list_source!(Trade, "transactions/trades");
http_list_source!(Reward, "transactions/rewards");

impl DetailSource<UserDetails> for HttpApi {
    fn fetch_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<Option<UserDetails>>> {
        Box::pin(self.get_detail("users", id))
    }
}

impl TaskWriter for HttpApi {
    fn create_task<'a>(&'a self, new_task: &'a NewTask) -> BoxFuture<'a, ApiResult<Task>> {
        Box::pin(async move {
            let url = format!("{}/tasks", self.base_url);
            let task = self
                .http
                .post(&url)
                .json(new_task)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await
                .map_err(|e| ApiError::Malformed(e.to_string()))?;
            Ok(task)
        })
    }

    fn update_task<'a>(
        &'a self,
        id: &'a str,
        updates: &'a UpdateTask,
    ) -> BoxFuture<'a, ApiResult<Task>> {
        Box::pin(async move {
            let url = format!("{}/tasks/{id}", self.base_url);
            let task = self
                .http
                .put(&url)
                .json(updates)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await
                .map_err(|e| ApiError::Malformed(e.to_string()))?;
            Ok(task)
        })
    }

    fn delete_task<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ApiResult<()>> {
        Box::pin(async move {
            let url = format!("{}/tasks/{id}", self.base_url);
            self.http.delete(&url).send().await?.error_for_status()?;
            Ok(())
        })
    }
}
