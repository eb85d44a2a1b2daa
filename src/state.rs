use tracing::{info, warn};

use crate::auth::repo_types::User;
use crate::config::AppConfig;
use crate::storage::{JsonFileStorage, StorageClient, StorageResult};
use crate::tasks::repo::TaskStore;

/// Everything one console session owns: the task list, the user list and
/// the storage they are flushed to.
pub struct AppState {
    pub config: AppConfig,
    pub storage: Box<dyn StorageClient>,
    pub tasks: TaskStore,
    pub users: Vec<User>,
}

impl AppState {
    /// Loads both collections from the configured JSON files.
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        let storage = Box::new(JsonFileStorage::new(
            config.tasks_file.clone(),
            config.users_file.clone(),
        )) as Box<dyn StorageClient>;
        Ok(Self::from_parts(config, storage))
    }

    /// Builds state around any storage. Unreadable or missing documents
    /// start as empty collections.
    pub fn from_parts(config: AppConfig, storage: Box<dyn StorageClient>) -> Self {
        let mut tasks = TaskStore::new();
        match storage.load_tasks() {
            Ok(loaded) => tasks.bulk_add(loaded),
            Err(e) => warn!(error = %e, "tasks not loaded; starting empty"),
        }

        let users = storage.load_users().unwrap_or_else(|e| {
            warn!(error = %e, "users not loaded; starting empty");
            Vec::new()
        });

        info!(tasks = tasks.len(), users = users.len(), "state initialised");
        Self {
            config,
            storage,
            tasks,
            users,
        }
    }

    pub fn save_tasks(&self) -> StorageResult<()> {
        self.storage.save_tasks(self.tasks.list())?;
        info!(count = self.tasks.len(), "tasks saved");
        Ok(())
    }

    pub fn save_users(&self) -> StorageResult<()> {
        self.storage.save_users(&self.users)?;
        info!(count = self.users.len(), "users saved");
        Ok(())
    }

    #[cfg(test)]
    pub fn fake() -> (Self, std::rc::Rc<fake::MemoryStorage>) {
        Self::fake_with(Vec::new(), Vec::new())
    }

    #[cfg(test)]
    pub fn fake_with(
        tasks: Vec<crate::tasks::repo_types::Task>,
        users: Vec<User>,
    ) -> (Self, std::rc::Rc<fake::MemoryStorage>) {
        let memory = std::rc::Rc::new(fake::MemoryStorage::seeded(tasks, users));
        let storage = Box::new(fake::Shared(memory.clone())) as Box<dyn StorageClient>;
        (Self::from_parts(AppConfig::default(), storage), memory)
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::auth::repo_types::User;
    use crate::storage::{StorageClient, StorageError, StorageResult};
    use crate::tasks::repo_types::Task;

    /// In-memory storage that records every save.
    #[derive(Default)]
    pub struct MemoryStorage {
        pub tasks: RefCell<Option<Vec<Task>>>,
        pub users: RefCell<Option<Vec<User>>>,
        pub task_saves: RefCell<usize>,
        pub user_saves: RefCell<usize>,
    }

    impl MemoryStorage {
        pub fn seeded(tasks: Vec<Task>, users: Vec<User>) -> Self {
            Self {
                tasks: RefCell::new(Some(tasks)),
                users: RefCell::new(Some(users)),
                ..Self::default()
            }
        }

        pub fn empty() -> Self {
            Self::default()
        }
    }

    fn missing() -> StorageError {
        StorageError::Io {
            path: "memory".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nothing stored"),
        }
    }

    pub struct Shared(pub Rc<MemoryStorage>);

    impl StorageClient for Shared {
        fn load_tasks(&self) -> StorageResult<Vec<Task>> {
            self.0.tasks.borrow().clone().ok_or_else(missing)
        }

        fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
            *self.0.tasks.borrow_mut() = Some(tasks.to_vec());
            *self.0.task_saves.borrow_mut() += 1;
            Ok(())
        }

        fn load_users(&self) -> StorageResult<Vec<User>> {
            self.0.users.borrow().clone().ok_or_else(missing)
        }

        fn save_users(&self, users: &[User]) -> StorageResult<()> {
            *self.0.users.borrow_mut() = Some(users.to_vec());
            *self.0.user_saves.borrow_mut() += 1;
            Ok(())
        }
    }
}
