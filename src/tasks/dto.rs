use serde::Deserialize;

use crate::tasks::repo_types::Task;

/// Input collected for "Add Task".
#[derive(Debug, Clone, Deserialize)]
pub struct NewTaskRequest {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub due_date: String,
}

/// Input collected for "Edit Task": a full replacement of the editable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct EditTaskRequest {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub due_date: String,
}

impl From<NewTaskRequest> for Task {
    fn from(r: NewTaskRequest) -> Self {
        Task::new(r.title, r.description, r.priority, r.due_date)
    }
}
