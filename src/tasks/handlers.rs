use std::io::{BufRead, Write};

use tracing::{error, info, instrument, warn};

use crate::prompt::{Prompt, PromptResult};
use crate::state::AppState;
use crate::tasks::dto::{EditTaskRequest, NewTaskRequest};
use crate::tasks::repo::{TaskError, TaskResult};
use crate::tasks::services::render_task_list;

pub const TASK_MENU: &str = "1. Add Task\n2. Edit Task\n3. Delete Task\n4. Display Tasks\n\
5. Set Task Status\n6. Set Task Priority\n7. Set Task Due Date\n8. Save and Exit";
pub const CHOICE_LABEL: &str = "Enter your choice: ";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again.";
pub const EXIT_MESSAGE: &str = "Exiting...";
pub const NOT_FOUND_MESSAGE: &str = "Task not found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMenuChoice {
    Add,
    Edit,
    Delete,
    Display,
    SetStatus,
    SetPriority,
    SetDueDate,
    SaveAndExit,
}

impl TaskMenuChoice {
    pub fn from_number(n: u32) -> Option<Self> {
        Some(match n {
            1 => Self::Add,
            2 => Self::Edit,
            3 => Self::Delete,
            4 => Self::Display,
            5 => Self::SetStatus,
            6 => Self::SetPriority,
            7 => Self::SetDueDate,
            8 => Self::SaveAndExit,
            _ => return None,
        })
    }
}

/// Authenticated task menu. Returns after "Save and Exit".
#[instrument(skip_all)]
pub fn run_task_menu<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    state: &mut AppState,
) -> PromptResult<()> {
    loop {
        prompt.say(TASK_MENU)?;
        let choice = prompt.ask_choice(CHOICE_LABEL)?.and_then(TaskMenuChoice::from_number);
        match choice {
            Some(TaskMenuChoice::Add) => add_task(prompt, state)?,
            Some(TaskMenuChoice::Edit) => edit_task(prompt, state)?,
            Some(TaskMenuChoice::Delete) => delete_task(prompt, state)?,
            Some(TaskMenuChoice::Display) => prompt.print(&render_task_list(state.tasks.list()))?,
            Some(TaskMenuChoice::SetStatus) => set_status(prompt, state)?,
            Some(TaskMenuChoice::SetPriority) => set_priority(prompt, state)?,
            Some(TaskMenuChoice::SetDueDate) => set_due_date(prompt, state)?,
            Some(TaskMenuChoice::SaveAndExit) => {
                if let Err(e) = state.save_tasks() {
                    error!(error = %e, "saving tasks failed");
                    prompt.say(&format!("Failed to save tasks: {e}"))?;
                }
                prompt.say(EXIT_MESSAGE)?;
                return Ok(());
            }
            None => {
                warn!("invalid task menu choice");
                prompt.say(INVALID_CHOICE_MESSAGE)?;
            }
        }
    }
}

fn add_task<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> PromptResult<()> {
    prompt.say("Enter task details:")?;
    let req = NewTaskRequest {
        title: prompt.ask("Title: ")?,
        description: prompt.ask("Description: ")?,
        priority: prompt.ask_int("Priority: ")?,
        due_date: prompt.ask("Due Date: ")?,
    };
    info!(title = %req.title, "adding task");
    state.tasks.add(req.into());
    prompt.say("Task added successfully.")
}

fn edit_task<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> PromptResult<()> {
    let title = prompt.ask("Enter the title of the task to edit: ")?;
    prompt.say("Enter new task details:")?;
    let req = EditTaskRequest {
        title,
        description: prompt.ask("New Description: ")?,
        priority: prompt.ask_int("New Priority: ")?,
        due_date: prompt.ask("New Due Date: ")?,
    };
    let outcome = state.tasks.edit(req);
    report(prompt, outcome, "Task edited successfully.")
}

fn delete_task<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> PromptResult<()> {
    let title = prompt.ask("Enter the title of the task to delete: ")?;
    let outcome = state.tasks.delete(&title).map(|_| ());
    report(prompt, outcome, "Task deleted successfully.")
}

fn set_status<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> PromptResult<()> {
    let title = prompt.ask("Enter the title of the task: ")?;
    let status = prompt.ask("Enter the new status (e.g., pending, completed): ")?;
    let outcome = state.tasks.set_status(&title, status);
    report(prompt, outcome, "Task status updated successfully.")
}

fn set_priority<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> PromptResult<()> {
    let title = prompt.ask("Enter the title of the task: ")?;
    let priority = prompt.ask_int("Enter the new priority: ")?;
    let outcome = state.tasks.set_priority(&title, priority);
    report(prompt, outcome, "Task priority updated successfully.")
}

fn set_due_date<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> PromptResult<()> {
    let title = prompt.ask("Enter the title of the task: ")?;
    let due_date = prompt.ask("Enter the new due date: ")?;
    let outcome = state.tasks.set_due_date(&title, due_date);
    report(prompt, outcome, "Task due date updated successfully.")
}

fn report<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    outcome: TaskResult<()>,
    success: &str,
) -> PromptResult<()> {
    match outcome {
        Ok(()) => prompt.say(success),
        Err(TaskError::NotFound { title }) => {
            warn!(title = %title, "task not found");
            prompt.say(NOT_FOUND_MESSAGE)
        }
    }
}
