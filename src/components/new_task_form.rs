//! New Task Form Component
//!
//! Text input plus add button. Enter submits too.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::dialogs;
use crate::context::use_task_context;
use crate::controller::{self, AddOutcome};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_task_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if controller::is_blank(&text) {
            dialogs::alert("Enter a task description!");
            return;
        }
        let handlers = ctx.handlers();

        spawn_local(async move {
            match handlers.add(&text).await {
                AddOutcome::Created(_) => {
                    // Input is kept on failure so the text can be resubmitted
                    set_new_text.set(String::new());
                    ctx.reload();
                }
                AddOutcome::Empty | AddOutcome::Failed => {}
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                id="task-input"
                type="text"
                placeholder="Add new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="add-button" type="submit">"Add"</button>
        </form>
    }
}
