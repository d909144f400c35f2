//! Mock collaborator implementations for isolating controllers and services
//! in tests.

use mockall::mock;

use crate::api::{ApiResult, BoxFuture, DetailSource, ListQuery, ListSource, TaskWriter};
use crate::domain::task::{NewTask, Task, UpdateTask};
use crate::domain::user::{User, UserDetails};
use crate::pagination::ListResult;

mock! {
    pub UserApi {}

    impl ListSource<User> for UserApi {
        fn fetch_page(
            &self,
            query: &ListQuery,
        ) -> BoxFuture<'static, ApiResult<ListResult<User>>>;
    }

    impl DetailSource<UserDetails> for UserApi {
        fn fetch_by_id(&self, id: &str) -> BoxFuture<'static, ApiResult<Option<UserDetails>>>;
    }
}

mock! {
    pub TaskApi {}

    impl ListSource<Task> for TaskApi {
        fn fetch_page(
            &self,
            query: &ListQuery,
        ) -> BoxFuture<'static, ApiResult<ListResult<Task>>>;
    }

    impl TaskWriter for TaskApi {
        fn create_task(&self, new_task: &NewTask) -> BoxFuture<'static, ApiResult<Task>>;
        fn update_task(
            &self,
            id: &str,
            updates: &UpdateTask,
        ) -> BoxFuture<'static, ApiResult<Task>>;
        fn delete_task(&self, id: &str) -> BoxFuture<'static, ApiResult<()>>;
    }
}
