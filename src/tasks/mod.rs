pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use repo::{TaskError, TaskResult, TaskStore};
pub use repo_types::{Task, DEFAULT_STATUS};
