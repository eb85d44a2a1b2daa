use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::debug;

use crate::auth::repo_types::User;
use crate::tasks::repo_types::Task;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Where tasks and users live between runs.
pub trait StorageClient {
    fn load_tasks(&self) -> StorageResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()>;
    fn load_users(&self) -> StorageResult<Vec<User>>;
    fn save_users(&self, users: &[User]) -> StorageResult<()>;
}

/// JSON array documents on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    tasks_file: PathBuf,
    users_file: PathBuf,
}

impl JsonFileStorage {
    pub fn new(tasks_file: impl Into<PathBuf>, users_file: impl Into<PathBuf>) -> Self {
        Self {
            tasks_file: tasks_file.into(),
            users_file: users_file.into(),
        }
    }

    pub fn tasks_file(&self) -> &Path {
        &self.tasks_file
    }

    pub fn users_file(&self) -> &Path {
        &self.users_file
    }
}

impl StorageClient for JsonFileStorage {
    fn load_tasks(&self) -> StorageResult<Vec<Task>> {
        load_tasks(&self.tasks_file)
    }

    fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        save_tasks(&self.tasks_file, tasks)
    }

    fn load_users(&self) -> StorageResult<Vec<User>> {
        load_users(&self.users_file)
    }

    fn save_users(&self, users: &[User]) -> StorageResult<()> {
        save_users(&self.users_file, users)
    }
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> StorageResult<()> {
    write_array(path, tasks)
}

pub fn load_tasks(path: &Path) -> StorageResult<Vec<Task>> {
    read_array(path)
}

pub fn save_users(path: &Path, users: &[User]) -> StorageResult<()> {
    write_array(path, users)
}

pub fn load_users(path: &Path) -> StorageResult<Vec<User>> {
    read_array(path)
}

/// Overwrites `path` with a 4-space indented JSON array.
fn write_array<T: Serialize>(path: &Path, records: &[T]) -> StorageResult<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    buf.push(b'\n');

    fs::write(path, &buf).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = records.len(), "records saved");
    Ok(())
}

fn read_array<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = records.len(), "records loaded");
    Ok(records)
}
