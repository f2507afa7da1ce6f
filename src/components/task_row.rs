//! Task Row Component
//!
//! Single task in the list: checkbox, text, edit and delete buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::dialogs;
use crate::context::use_task_context;
use crate::controller::{EditOutcome, ToggleOutcome};
use crate::models::Task;

pub fn row_class(completed: bool) -> &'static str {
    if completed { "task completed" } else { "task" }
}

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_task_context();

    let data_id = task.id.to_string();
    let content = task.content.clone();
    let task = StoredValue::new(task);

    let completed = move || task.with_value(|t| ctx.displayed_completed(t));

    let on_toggle = move |_| {
        // Flip from what the user sees, which may itself be pending
        let mut shown = task.get_value();
        shown.completed = ctx.displayed_completed(&shown);
        ctx.set_pending(shown.id.clone(), !shown.completed);

        let handlers = ctx.handlers();
        spawn_local(async move {
            match handlers.toggle(&shown).await {
                ToggleOutcome::Confirmed(_) => ctx.reload(),
                ToggleOutcome::RolledBack(_) => ctx.clear_pending(&shown.id),
            }
        });
    };

    let on_edit = move |_| {
        let current = task.get_value();
        let reply = dialogs::prompt("Edit task:", &current.content);

        let handlers = ctx.handlers();
        spawn_local(async move {
            if let EditOutcome::Saved(_) = handlers.edit(&current, reply).await {
                ctx.reload();
            }
        });
    };

    let on_delete = move |_| {
        let id = task.with_value(|t| t.id.clone());
        let handlers = ctx.handlers();
        spawn_local(async move {
            if handlers.delete(&id).await {
                ctx.reload();
            }
        });
    };

    view! {
        <li
            class=move || row_class(completed())
            data-id=data_id
        >
            <input
                type="checkbox"
                class="task-checkbox"
                prop:checked=completed
                on:change=on_toggle
            />
            <span class="task-content">{content}</span>
            <button class="edit-button" on:click=on_edit>"Edit"</button>
            <button class="delete-button" on:click=on_delete>"Delete"</button>
        </li>
    }
}
