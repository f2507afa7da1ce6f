//! Task Summary
//!
//! Counters shown above the list: total, completed, percent complete.

use crate::models::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// floor(100 * completed / total), or None for an empty list
    pub fn percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        Some((self.completed * 100 / self.total) as u32)
    }

    /// An empty list reads as "0%"
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent().unwrap_or(0))
    }
}
