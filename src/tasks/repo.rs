use thiserror::Error;
use tracing::debug;

use crate::tasks::dto::EditTaskRequest;
use crate::tasks::repo_types::Task;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task not found: {title}")]
    NotFound { title: String },
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Ordered, title-keyed task collection.
///
/// Titles are not unique. Edits and single-field setters touch the first
/// match only; `delete` removes every match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task. Duplicate titles are accepted.
    pub fn add(&mut self, task: Task) {
        debug!(title = %task.title, "task added");
        self.tasks.push(task);
    }

    /// Appends a whole batch, used to seed the store from disk.
    pub fn bulk_add(&mut self, tasks: impl IntoIterator<Item = Task>) {
        let before = self.tasks.len();
        self.tasks.extend(tasks);
        debug!(count = self.tasks.len() - before, "tasks seeded");
    }

    /// Replaces description, priority and due date of the first match and
    /// resets its status to the default.
    pub fn edit(&mut self, req: EditTaskRequest) -> TaskResult<()> {
        let task = self.first_mut(&req.title)?;
        *task = Task::new(req.title, req.description, req.priority, req.due_date);
        debug!(title = %task.title, "task edited");
        Ok(())
    }

    /// Removes every task with this title and returns how many were removed.
    pub fn delete(&mut self, title: &str) -> TaskResult<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.title != title);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Err(not_found(title));
        }
        debug!(title = %title, removed, "tasks deleted");
        Ok(removed)
    }

    pub fn set_status(&mut self, title: &str, status: impl Into<String>) -> TaskResult<()> {
        self.first_mut(title)?.status = status.into();
        Ok(())
    }

    pub fn set_priority(&mut self, title: &str, priority: i32) -> TaskResult<()> {
        self.first_mut(title)?.priority = priority;
        Ok(())
    }

    pub fn set_due_date(&mut self, title: &str, due_date: impl Into<String>) -> TaskResult<()> {
        self.first_mut(title)?.due_date = due_date.into();
        Ok(())
    }

    /// Tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    fn first_mut(&mut self, title: &str) -> TaskResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.title == title)
            .ok_or_else(|| not_found(title))
    }
}

fn not_found(title: &str) -> TaskError {
    TaskError::NotFound {
        title: title.to_string(),
    }
}
