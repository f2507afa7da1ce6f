//! In-memory Task Store
//!
//! Stand-in for the remote collection in tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::TaskStore;
use crate::error::{ApiResult, RequestError};
use crate::models::{NewTask, Task, TaskId, TaskPatch};

#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
    next_id: Mutex<u64>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Number(n) => Some(n),
                TaskId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            tasks: Mutex::new(tasks),
            next_id: Mutex::new(next),
            ..Default::default()
        }
    }

    /// Make every following call fail as if the store were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of calls received so far (including failed ones)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn enter(&self) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(RequestError::Network("store unreachable".to_string()));
        }
        Ok(())
    }

    fn not_found(method: &'static str, id: &TaskId) -> RequestError {
        RequestError::Status {
            method,
            url: format!("memory://tasks/{}", id),
            status: 404,
        }
    }
}

#[async_trait(?Send)]
impl TaskStore for MemoryTaskStore {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        self.enter()?;
        Ok(self.snapshot())
    }

    async fn create(&self, task: &NewTask) -> ApiResult<Task> {
        self.enter()?;
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let created = Task {
            id: TaskId::Number(*next),
            content: task.content.clone(),
            completed: task.completed,
        };
        self.tasks.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> ApiResult<()> {
        self.enter()?;
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| Self::not_found("PATCH", id))?;
        patch.apply_to(task);
        Ok(())
    }

    async fn remove(&self, id: &TaskId) -> ApiResult<()> {
        self.enter()?;
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found("DELETE", id));
        }
        Ok(())
    }
}
