use std::fmt::Write as _;

use crate::tasks::repo_types::Task;

pub const NO_TASKS_MESSAGE: &str = "No tasks available.";

/// Renders one task as the block shown by "Display Tasks".
pub fn render_task(task: &Task) -> String {
    format!(
        "Title: {}\nDescription: {}\nPriority: {}\nDue Date: {}\nStatus: {}\n",
        task.title, task.description, task.priority, task.due_date, task.status
    )
}

/// Renders every task separated by blank lines, or the "no tasks" notice.
pub fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{NO_TASKS_MESSAGE}\n");
    }
    let mut out = String::new();
    for task in tasks {
        let _ = writeln!(out, "{}", render_task(task));
    }
    out
}
