//! Category Panel Component

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::dom::closest_target;
use crate::render::render_category_list;
use crate::store::AppStateStoreFields;

/// Known categories with per-category counts over the loaded task list.
/// Clicking one searches for it.
#[component]
pub fn CategoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(category) = closest_target(&ev, "[data-category]")
            .and_then(|item| item.get_attribute("data-category"))
        {
            actions::select_category(ctx, category);
        }
    };

    view! {
        <div class="categories-panel">
            <h3>"Categories"</h3>
            <div
                id="category-list"
                class="category-list"
                on:click=on_click
                inner_html=move || render_category_list(&store.categories().read(), &store.tasks().read())
            ></div>
        </div>
    }
}
