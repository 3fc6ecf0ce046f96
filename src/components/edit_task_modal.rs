//! Edit Task Modal Component
//!
//! Closed while `AppContext::editing` is None. Opening pre-fills the form
//! from the selected task; close button, cancel, backdrop click and a
//! successful update all close it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::PrioritySelect;
use crate::context::use_app_context;
use crate::dom::is_self_target;
use crate::models::{Task, TaskUpdate};

#[component]
pub fn EditTaskModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.editing.get().map(|task| view! { <EditTaskDialog task=task /> })}
    }
}

#[component]
fn EditTaskDialog(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id;
    let initial = TaskUpdate::from_task(&task);

    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description);
    let (category, set_category) = signal(initial.category);
    let (priority, set_priority) = signal(initial.priority);
    let (completed, set_completed) = signal(initial.completed);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = TaskUpdate {
            title: title.get(),
            description: description.get(),
            category: category.get(),
            priority: priority.get(),
            completed: completed.get(),
        };
        spawn_local(actions::update_task(ctx, id, update));
    };

    view! {
        <div
            id="edit-modal"
            class="modal"
            style="display: flex;"
            on:click=move |ev| {
                if is_self_target(&ev) {
                    ctx.close_editor();
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Edit Task"</h2>
                    <button type="button" class="close" on:click=move |_| ctx.close_editor()>"×"</button>
                </div>
                <form id="edit-task-form" on:submit=on_submit>
                    <input type="hidden" id="edit-task-id" value=id.to_string() />
                    <div class="form-group">
                        <label for="edit-title">"Title"</label>
                        <input
                            type="text"
                            id="edit-title"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-description">"Description"</label>
                        <textarea
                            id="edit-description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="edit-category">"Category"</label>
                            <input
                                type="text"
                                id="edit-category"
                                prop:value=move || category.get()
                                on:input=move |ev| set_category.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="edit-priority">"Priority"</label>
                            <PrioritySelect id="edit-priority" value=priority set_value=set_priority />
                        </div>
                    </div>
                    <div class="form-group checkbox-group">
                        <label>
                            <input
                                type="checkbox"
                                id="edit-completed"
                                prop:checked=move || completed.get()
                                on:change=move |ev| set_completed.set(event_target_checked(&ev))
                            />
                            " Completed"
                        </label>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary close-modal" on:click=move |_| ctx.close_editor()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save Changes"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
