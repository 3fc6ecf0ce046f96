//! Stats Panel Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="stats">
            <div class="stat-item">
                <span class="stat-value" id="total-tasks">{move || store.stats().read().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat-item">
                <span class="stat-value" id="completed-tasks">{move || store.stats().read().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
            <div class="stat-item">
                <span class="stat-value" id="pending-tasks">{move || store.stats().read().pending}</span>
                <span class="stat-label">"Pending"</span>
            </div>
            {move || store.stats().read().completion_rate.map(|rate| view! {
                <div class="stat-item">
                    <span class="stat-value" id="completion-rate">{format!("{:.1}%", rate)}</span>
                    <span class="stat-label">"Done"</span>
                </div>
            })}
        </div>
    }
}
