//! Filter Buttons Component
//!
//! All / Pending / Completed switch; the active one is highlighted.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::filter::Filter;
use crate::store::AppStateStoreFields;

#[component]
pub fn FilterButtons() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="filter-buttons">
            {Filter::ALL.into_iter().map(|filter| {
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| actions::select_filter(ctx, filter)
                    >
                        {filter.button_label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
