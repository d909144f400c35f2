use serde::Deserialize;
use validator::Validate;

use crate::domain::task::{NewTask, TaskType, UpdateTask};

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for creating a reward task.
pub struct CreateTaskForm {
    /// Social platform the task points at.
    pub task_type: TaskType,
    /// Reward in points.
    #[validate(range(min = 1))]
    pub reward_amount: u64,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(url)]
    pub link: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for editing an existing task.
pub struct EditTaskForm {
    /// Identifier of the task being edited.
    pub id: String,
    pub task_type: TaskType,
    #[validate(range(min = 1))]
    pub reward_amount: u64,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(url)]
    pub link: String,
    pub is_active: bool,
}

impl From<&CreateTaskForm> for NewTask {
    fn from(form: &CreateTaskForm) -> Self {
        NewTask {
            task_type: form.task_type,
            reward_amount: form.reward_amount,
            description: form.description.trim().to_string(),
            link: form.link.trim().to_string(),
        }
    }
}

impl From<&EditTaskForm> for UpdateTask {
    fn from(form: &EditTaskForm) -> Self {
        UpdateTask {
            task_type: form.task_type,
            reward_amount: form.reward_amount,
            description: form.description.trim().to_string(),
            link: form.link.trim().to_string(),
            is_active: form.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CreateTaskForm {
        CreateTaskForm {
            task_type: TaskType::Youtube,
            reward_amount: 50,
            description: "Watch our product introduction video".to_string(),
            link: "https://youtube.com/watch?v=example1".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn empty_description_is_rejected() {
        let form = CreateTaskForm {
            description: String::new(),
            ..valid_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn zero_reward_is_rejected() {
        let form = CreateTaskForm {
            reward_amount: 0,
            ..valid_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn non_url_link_is_rejected() {
        let form = CreateTaskForm {
            link: "not a link".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_err());
    }
}
