//! Task Summary Bar Component

use leptos::prelude::*;

use crate::models::Task;
use crate::summary::TaskSummary;

/// Total / completed / percent counters
#[component]
pub fn TaskSummaryBar(tasks: ReadSignal<Vec<Task>>) -> impl IntoView {
    let summary = Memo::new(move |_| tasks.with(|t| TaskSummary::from_tasks(t)));

    view! {
        <div class="task-summary">
            <span class="summary-item">"All: " <span id="all">{move || summary.get().total}</span></span>
            <span class="summary-item">"Done: " <span id="completed">{move || summary.get().completed}</span></span>
            <span class="summary-item">"Progress: " <span id="proc">{move || summary.get().percent_label()}</span></span>
        </div>
    }
}
