use crate::task::{Status, Task, TaskPatch, TaskStore};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// List loaded when no other list is named, and the fallback after deleting
/// the active list.
pub const DEFAULT_LIST: &str = "default";

/// Tasks older than this many days are reported as outdated.
pub const TTL_DAYS: i64 = 7;

const LIST_EXTENSION: &str = "json";

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("list '{0}' does not exist")]
    ListNotFound(String),
    #[error("task with id {0} not found")]
    TaskNotFound(u32),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed list file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The active/outdated partition produced for display. Outdated entries carry
/// the number of days past the time-to-live window.
#[derive(Debug, Default)]
pub struct TaskListing {
    pub active: Vec<Task>,
    pub outdated: Vec<(Task, i64)>,
}

/// Binds a [`TaskStore`] to one of several named list files in a working
/// directory and keeps them synchronized: the store is reloaded wholesale
/// whenever the active list changes and saved after every mutation.
pub struct TaskListManager {
    dir: PathBuf,
    current_list: String,
    store: TaskStore,
}

impl TaskListManager {
    /// Opens a manager over `dir` with the default list active, loading
    /// `default.json` if it exists.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, TaskError> {
        let mut manager = Self {
            dir: dir.into(),
            current_list: DEFAULT_LIST.to_string(),
            store: TaskStore::new(),
        };
        manager.load()?;
        Ok(manager)
    }

    pub fn current_list(&self) -> &str {
        &self.current_list
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Makes `name` the active list and reloads the store from its file.
    pub fn switch_to(&mut self, name: &str) -> Result<(), TaskError> {
        if !self.list_path(name).exists() {
            return Err(TaskError::ListNotFound(name.to_string()));
        }
        self.current_list = name.to_string();
        self.load()
    }

    /// Creates an empty list under `name` and makes it active. An existing
    /// list of the same name is overwritten silently. This is the only
    /// operation that resets the id counter.
    pub fn create_list(&mut self, name: &str) -> Result<(), TaskError> {
        self.store.reset();
        self.current_list = name.to_string();
        self.save()
    }

    /// Deletes the list file for `name`. Deleting the active list falls back
    /// to the default list, implicitly empty if its file does not exist.
    /// Returns whether that fallback happened.
    pub fn delete_list(&mut self, name: &str) -> Result<bool, TaskError> {
        let path = self.list_path(name);
        if !path.exists() {
            return Err(TaskError::ListNotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        if self.current_list == name {
            self.current_list = DEFAULT_LIST.to_string();
            self.load()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Adds a task dated today to the active list and persists it.
    pub fn add_task(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<u32, TaskError> {
        let id = self.store.next_id();
        self.store.add(Task {
            id,
            name: name.into(),
            description: description.into(),
            status: Status::default(),
            created_at: Some(Local::now().date_naive()),
        });
        self.save()?;
        Ok(id)
    }

    /// Partitions the active list into active and outdated tasks as of
    /// `today`. A missing creation date counts as age zero. The status filter
    /// restricts only the active set; outdated tasks are always included.
    pub fn listing(&self, today: NaiveDate, status_filter: Option<Status>) -> TaskListing {
        let mut listing = TaskListing::default();
        for task in self.store.tasks() {
            let age = task
                .created_at
                .map_or(0, |created| (today - created).num_days());
            if age <= TTL_DAYS {
                if status_filter.map_or(true, |wanted| task.status == wanted) {
                    listing.active.push(task.clone());
                }
            } else {
                listing.outdated.push((task.clone(), age - TTL_DAYS));
            }
        }
        listing
    }

    /// Sets the status mapped from `code` and persists. An unrecognized code
    /// leaves the current status in place.
    pub fn update_status(&mut self, id: u32, code: &str) -> Result<Task, TaskError> {
        let Some(task) = self.store.get_mut(id) else {
            return Err(TaskError::TaskNotFound(id));
        };
        if let Some(status) = Status::from_code(code) {
            task.status = status;
        }
        let updated = task.clone();
        self.save()?;
        Ok(updated)
    }

    /// Applies a partial name/description update and persists.
    pub fn edit_task(&mut self, id: u32, patch: &TaskPatch) -> Result<Task, TaskError> {
        let Some(task) = self.store.modify(id, patch) else {
            return Err(TaskError::TaskNotFound(id));
        };
        let updated = task.clone();
        self.save()?;
        Ok(updated)
    }

    /// Removes a task by id and persists, returning the removed task.
    pub fn remove_task(&mut self, id: u32) -> Result<Task, TaskError> {
        let Some(task) = self.store.remove(id) else {
            return Err(TaskError::TaskNotFound(id));
        };
        self.save()?;
        Ok(task)
    }

    /// Names of all list files in the working directory, extension stripped,
    /// sorted.
    pub fn available_lists(&self) -> Result<Vec<String>, TaskError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == LIST_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn list_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{LIST_EXTENSION}"))
    }

    fn load(&mut self) -> Result<(), TaskError> {
        let path = self.list_path(&self.current_list);
        if !path.exists() {
            self.store.clear();
            return Ok(());
        }
        let contents = fs::read_to_string(&path)?;
        let records: Vec<Task> = serde_json::from_str(&contents)
            .map_err(|source| TaskError::Malformed { path, source })?;
        self.store.load_records(records);
        Ok(())
    }

    fn save(&self) -> Result<(), TaskError> {
        let path = self.list_path(&self.current_list);
        let records: Vec<&Task> = self.store.tasks().collect();
        let contents = serde_json::to_string_pretty(&records)
            .map_err(|source| TaskError::Malformed { path: path.clone(), source })?;
        fs::write(path, contents)?;
        Ok(())
    }
}
