//! Task List App
//!
//! Root component: wires the store into context and reloads on demand.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpTaskStore, TaskStore};
use crate::components::{NewTaskForm, TaskList, TaskSummaryBar};
use crate::config::AppConfig;
use crate::context::TaskContext;
use crate::controller::TaskHandlers;
use crate::models::Task;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let store: Arc<dyn TaskStore> = Arc::new(HttpTaskStore::new(config));
    let ctx = TaskContext::new(set_reload_trigger, TaskHandlers::new(store));

    // Provide context to all children
    provide_context(ctx);

    // Load tasks on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let ticket = ctx.begin_reload();
        let handlers = ctx.handlers();
        log::debug!("Reloading tasks, trigger={}", trigger);
        spawn_local(async move {
            let Some(loaded) = handlers.reload().await else { return };
            if !ctx.is_latest_reload(ticket) {
                log::debug!("Dropping stale reload #{}", ticket);
                return;
            }
            ctx.settle_pending(&loaded);
            set_tasks.set(loaded);
        });
    });

    view! {
        <main class="task-app">
            <h1>"Tasks"</h1>

            <NewTaskForm />

            <TaskSummaryBar tasks=tasks />

            <TaskList tasks=tasks />
        </main>
    }
}
