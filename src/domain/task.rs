use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::{Record, Searchable, contains_ci};

/// Social platform a reward task points at.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Youtube,
    Facebook,
    Twitter,
    Discord,
}

impl TaskType {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Youtube => "youtube",
            TaskType::Facebook => "facebook",
            TaskType::Twitter => "twitter",
            TaskType::Discord => "discord",
        }
    }
}

impl Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reward task campaign shown in the tasks view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Reward in points.
    pub reward_amount: u64,
    pub description: String,
    pub link: String,
    pub is_active: bool,
}

/// Payload for the create-task endpoint; the backend assigns the identifier.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub reward_amount: u64,
    pub description: String,
    pub link: String,
}

/// Full-replacement payload for the update-task endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub reward_amount: u64,
    pub description: String,
    pub link: String,
    pub is_active: bool,
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Task {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.id, term) || contains_ci(&self.description, term)
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.task_type.as_str().eq_ignore_ascii_case(filter)
    }
}
