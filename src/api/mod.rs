//! Task Store Client
//!
//! Access to the remote `tasks` collection. `HttpTaskStore` talks to the real
//! endpoint; tests use the in-memory fake.

mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskId, TaskPatch};

pub use http::HttpTaskStore;

/// CRUD over the remote task collection.
///
/// Futures are not `Send`: everything runs on the browser's UI thread.
#[async_trait(?Send)]
pub trait TaskStore: Send + Sync {
    /// All tasks, in store order
    async fn list(&self) -> ApiResult<Vec<Task>>;

    /// Create a task; the returned record carries the assigned id
    async fn create(&self, task: &NewTask) -> ApiResult<Task>;

    /// Apply a sparse update. The response body is ignored.
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> ApiResult<()>;

    /// Delete by id. The response body is ignored.
    async fn remove(&self, id: &TaskId) -> ApiResult<()>;
}
