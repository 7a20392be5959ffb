use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<chrono::NaiveDate>,
}

#[derive(Debug, Default, Eq, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum Status {
    #[default]
    Started,
    Paused,
    Completed,
}

impl Status {
    /// Maps a single-character CLI code to a status. Anything outside
    /// "1"/"2"/"3" maps to `None` and callers keep the current status.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Status::Started),
            "2" => Some(Status::Paused),
            "3" => Some(Status::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Started => "Started",
            Status::Paused => "Paused",
            Status::Completed => "Completed",
        })
    }
}

/// Partial update for a task. Absent fields are left untouched.
/// Status changes go through `TaskListManager::update_status` instead.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// In-memory registry of tasks keyed by id, plus the id counter.
///
/// Ids are assigned in increasing order and never reused, so iterating the
/// map in key order is insertion order. The counter survives removals and
/// list reloads; only `reset` zeroes it.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: BTreeMap<u32, Task>,
    next_id: u32,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next free id and advances the counter.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Inserts keyed by `task.id`; an existing entry with the same id is
    /// replaced silently (ids come from the counter, not from users).
    pub fn add(&mut self, task: Task) {
        self.tasks.insert(task.id, task);
    }

    pub fn remove(&mut self, id: u32) -> Option<Task> {
        self.tasks.remove(&id)
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.get_mut(&id)
    }

    /// Applies the fields present in the patch, leaving the rest untouched.
    pub fn modify(&mut self, id: u32, patch: &TaskPatch) -> Option<&Task> {
        let task = self.tasks.get_mut(&id)?;
        if let Some(name) = &patch.name {
            task.name = name.clone();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        Some(task)
    }

    /// Empties the entries. The counter is left alone so ids stay unique
    /// across reloads.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Empties the entries and zeroes the counter. Only used when a fresh
    /// empty list is created.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.next_id = 0;
    }

    /// Replaces the contents with the given records and advances the counter
    /// past the largest loaded id. The counter is never lowered.
    pub fn load_records(&mut self, records: impl IntoIterator<Item = Task>) {
        self.clear();
        for task in records {
            self.next_id = self.next_id.max(task.id + 1);
            self.tasks.insert(task.id, task);
        }
    }

    /// Tasks in id order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
