use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";
pub const DEFAULT_USERS_FILE: &str = "users.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub tasks_file: PathBuf,
    pub users_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let tasks_file = std::env::var("TASKS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TASKS_FILE.into());
        let users_file = std::env::var("USERS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USERS_FILE.into());
        Ok(Self {
            tasks_file: PathBuf::from(tasks_file),
            users_file: PathBuf::from(users_file),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
        }
    }
}
