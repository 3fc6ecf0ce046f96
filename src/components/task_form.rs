//! New Task Form Component
//!
//! Form for creating tasks. Only the title is required.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::PrioritySelect;
use crate::context::use_app_context;
use crate::models::NewTask;

const DEFAULT_CATEGORY: &str = "general";
const DEFAULT_PRIORITY: i32 = 2;

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(DEFAULT_CATEGORY.to_string());
    let (priority, set_priority) = signal(DEFAULT_PRIORITY);

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_category.set(DEFAULT_CATEGORY.to_string());
        set_priority.set(DEFAULT_PRIORITY);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task = NewTask {
            title: title.get(),
            description: description.get(),
            category: category.get(),
            priority: priority.get(),
        };
        spawn_local(async move {
            if actions::create_task(ctx, task).await {
                reset();
            }
        });
    };

    view! {
        <form id="task-form" class="task-form" on:submit=on_submit>
            <h2>"Add New Task"</h2>
            <div class="form-group">
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    required
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="category">"Category"</label>
                    <input
                        type="text"
                        id="category"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="priority">"Priority"</label>
                    <PrioritySelect id="priority" value=priority set_value=set_priority />
                </div>
            </div>
            <button type="submit" class="btn btn-primary">"Add Task"</button>
        </form>
    }
}
