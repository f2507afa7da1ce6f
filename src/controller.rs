//! Task Handlers
//!
//! What happens when the user adds, toggles, edits or deletes a task.
//! Failures are logged here and reported back as outcomes; the caller decides
//! whether to reload.

use std::sync::Arc;

use crate::api::TaskStore;
use crate::models::{NewTask, Task, TaskId, TaskPatch};

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Blank input, nothing sent
    Empty,
    Created(Task),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The store accepted the new value
    Confirmed(bool),
    /// The store rejected it; the previous value stands
    RolledBack(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Prompt dismissed, blank, or unchanged
    Cancelled,
    Saved(String),
    Failed,
}

/// Whitespace-only input never reaches the store
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[derive(Clone)]
pub struct TaskHandlers {
    store: Arc<dyn TaskStore>,
}

impl TaskHandlers {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Fetch the full list. None if the store could not be read.
    pub async fn reload(&self) -> Option<Vec<Task>> {
        match self.store.list().await {
            Ok(tasks) => {
                log::debug!("Loaded {} tasks", tasks.len());
                Some(tasks)
            }
            Err(e) => {
                log::error!("Failed to load tasks: {}", e);
                None
            }
        }
    }

    pub async fn add(&self, input: &str) -> AddOutcome {
        if is_blank(input) {
            return AddOutcome::Empty;
        }
        let content = input.trim();
        match self.store.create(&NewTask::new(content)).await {
            Ok(task) => {
                log::info!("Created task {}", task.id);
                AddOutcome::Created(task)
            }
            Err(e) => {
                log::error!("Failed to add task: {}", e);
                AddOutcome::Failed
            }
        }
    }

    /// Flip completion. The view shows the new value as pending until this
    /// resolves; a rejected update rolls back to the old one.
    pub async fn toggle(&self, task: &Task) -> ToggleOutcome {
        let target = !task.completed;
        match self.store.update(&task.id, &TaskPatch::completed(target)).await {
            Ok(()) => ToggleOutcome::Confirmed(target),
            Err(e) => {
                log::error!("Failed to toggle task {}: {}", task.id, e);
                ToggleOutcome::RolledBack(task.completed)
            }
        }
    }

    /// `reply` is what the edit prompt returned (None when dismissed)
    pub async fn edit(&self, task: &Task, reply: Option<String>) -> EditOutcome {
        let content = match reply.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() && s != task.content => s.to_string(),
            _ => return EditOutcome::Cancelled,
        };
        match self.store.update(&task.id, &TaskPatch::content(content.clone())).await {
            Ok(()) => EditOutcome::Saved(content),
            Err(e) => {
                log::error!("Failed to edit task {}: {}", task.id, e);
                EditOutcome::Failed
            }
        }
    }

    pub async fn delete(&self, id: &TaskId) -> bool {
        match self.store.remove(id).await {
            Ok(()) => {
                log::info!("Deleted task {}", id);
                true
            }
            Err(e) => {
                log::error!("Failed to delete task {}: {}", id, e);
                false
            }
        }
    }
}
