//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::controller::TaskHandlers;
use crate::models::{Task, TaskId};

/// Hands out reload tickets so that only the newest reload gets rendered.
///
/// Two mutations in quick succession start two reloads; whichever finishes
/// last would otherwise win, even if it read the older state.
#[derive(Clone, Default)]
pub struct ReloadSequencer {
    issued: Arc<AtomicU64>,
}

impl ReloadSequencer {
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }
}

/// Drop pending toggles the store now agrees with
pub fn settle_pending(pending: &mut HashMap<TaskId, bool>, tasks: &[Task]) {
    pending.retain(|id, wanted| {
        tasks
            .iter()
            .find(|t| &t.id == id)
            .is_some_and(|t| t.completed != *wanted)
    });
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct TaskContext {
    /// Trigger to reload tasks from the store
    set_reload_trigger: WriteSignal<u32>,
    /// Completion values shown ahead of store confirmation
    pub pending: RwSignal<HashMap<TaskId, bool>>,
    handlers: StoredValue<TaskHandlers>,
    sequencer: StoredValue<ReloadSequencer>,
}

impl TaskContext {
    pub fn new(
        set_reload_trigger: WriteSignal<u32>,
        handlers: TaskHandlers,
    ) -> Self {
        Self {
            set_reload_trigger,
            pending: RwSignal::new(HashMap::new()),
            handlers: StoredValue::new(handlers),
            sequencer: StoredValue::new(ReloadSequencer::default()),
        }
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn handlers(&self) -> TaskHandlers {
        self.handlers.get_value()
    }

    pub fn begin_reload(&self) -> u64 {
        self.sequencer.with_value(|s| s.begin())
    }

    pub fn is_latest_reload(&self, ticket: u64) -> bool {
        self.sequencer.with_value(|s| s.is_latest(ticket))
    }

    /// Completion state to display for a task
    pub fn displayed_completed(&self, task: &Task) -> bool {
        self.pending
            .with(|p| p.get(&task.id).copied())
            .unwrap_or(task.completed)
    }

    pub fn set_pending(&self, id: TaskId, completed: bool) {
        self.pending.update(|p| {
            p.insert(id, completed);
        });
    }

    pub fn clear_pending(&self, id: &TaskId) {
        self.pending.update(|p| {
            p.remove(id);
        });
    }

    pub fn settle_pending(&self, tasks: &[Task]) {
        self.pending.update(|p| settle_pending(p, tasks));
    }
}

/// Get the task context
pub fn use_task_context() -> TaskContext {
    expect_context::<TaskContext>()
}
