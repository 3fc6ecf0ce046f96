//! Search Bar Component

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="search-box">
            <i class="fas fa-search"></i>
            <input
                type="text"
                id="search-input"
                placeholder="Search tasks..."
                prop:value=move || ctx.search_input.get()
                on:input=move |ev| actions::search(ctx, event_target_value(&ev))
            />
            <button
                type="button"
                id="clear-search"
                title="Clear search"
                on:click=move |_| actions::clear_search(ctx)
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
