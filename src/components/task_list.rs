//! Task List Component
//!
//! Renders every task in store order. Rows are keyed on all mutable
//! fields so an edited or toggled task is rebuilt after reload.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::models::Task;

#[component]
pub fn TaskList(tasks: ReadSignal<Vec<Task>>) -> impl IntoView {
    view! {
        <ul id="tasks" class="task-list">
            <For
                each=move || tasks.get()
                key=|task| (task.id.clone(), task.content.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
        <Show when=move || tasks.with(|t| t.is_empty())>
            <p class="empty-state">"No tasks yet."</p>
        </Show>
    }
}
