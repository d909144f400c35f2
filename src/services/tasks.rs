//! Task create/update/delete flows.
//!
//! Every successful mutation refreshes the supplied list controller so the
//! displayed table reflects the change; a failed mutation surfaces its own
//! error and leaves the list (and its error state) untouched.

use validator::Validate;

use crate::api::{ListSource, TaskWriter};
use crate::controller::ListController;
use crate::domain::task::{NewTask, Task, UpdateTask};
use crate::forms::task::{CreateTaskForm, EditTaskForm};
use crate::services::ServiceResult;

/// Validates the create-task form, creates the task, and refreshes the list.
pub async fn create_task<A, S>(
    api: &A,
    list: &ListController<Task, S>,
    form: &CreateTaskForm,
) -> ServiceResult<Task>
where
    A: TaskWriter + ?Sized,
    S: ListSource<Task>,
{
    form.validate()?;

    let task = api.create_task(&NewTask::from(form)).await.map_err(|err| {
        log::error!("Failed to create task: {err}");
        err
    })?;

    list.refresh().await;
    Ok(task)
}

/// Validates the edit-task form, applies the update, and refreshes the list.
pub async fn update_task<A, S>(
    api: &A,
    list: &ListController<Task, S>,
    form: &EditTaskForm,
) -> ServiceResult<Task>
where
    A: TaskWriter + ?Sized,
    S: ListSource<Task>,
{
    form.validate()?;

    let task = api
        .update_task(&form.id, &UpdateTask::from(form))
        .await
        .map_err(|err| {
            log::error!("Failed to update task {}: {err}", form.id);
            err
        })?;

    list.refresh().await;
    Ok(task)
}

/// Deletes the task and refreshes the list.
pub async fn delete_task<A, S>(
    api: &A,
    list: &ListController<Task, S>,
    task_id: &str,
) -> ServiceResult<()>
where
    A: TaskWriter + ?Sized,
    S: ListSource<Task>,
{
    api.delete_task(task_id).await.map_err(|err| {
        log::error!("Failed to delete task {task_id}: {err}");
        err
    })?;

    list.refresh().await;
    Ok(())
}
