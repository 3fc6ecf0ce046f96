//! Task List Component
//!
//! Renders the visible tasks as HTML fragments and dispatches their
//! controls through a single delegated click listener.

use leptos::prelude::*;

use crate::actions::{self, TaskAction};
use crate::context::use_app_context;
use crate::dom::closest_target;
use crate::filter::visible_tasks;
use crate::render::{render_task_list, tasks_heading};
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let visible = Memo::new(move |_| {
        visible_tasks(&store.tasks().read(), store.filter().get(), &store.search().read())
    });

    let heading = move || {
        visible.with(|tasks| tasks_heading(store.filter().get(), &store.search().read(), tasks.len()))
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(control) = closest_target(&ev, "[data-action]") else {
            return;
        };
        let action = control.get_attribute("data-action").unwrap_or_default();
        let id = control.get_attribute("data-id").unwrap_or_default();
        match TaskAction::parse(&action, &id) {
            Some(action) => {
                // The checkbox only reflects the service state after refresh
                if matches!(action, TaskAction::Toggle(_)) {
                    ev.prevent_default();
                }
                actions::dispatch(ctx, action);
            }
            None => tracing::warn!(%action, %id, "unrecognized task control"),
        }
    };

    view! {
        <section class="tasks-section">
            <div class="tasks-header">
                <h2 id="tasks-title">{heading}</h2>
            </div>
            <div
                id="tasks-list"
                class="tasks-list"
                on:click=on_click
                inner_html=move || visible.with(|tasks| render_task_list(tasks))
            ></div>
            <Show when=move || visible.with(|tasks| tasks.is_empty())>
                <div id="no-tasks" class="no-tasks">
                    <i class="fas fa-clipboard-list"></i>
                    <p>"No tasks found"</p>
                </div>
            </Show>
        </section>
    }
}
