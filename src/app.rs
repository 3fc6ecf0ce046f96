//! Task Board App
//!
//! Main application component: form and overview on the left, task list on
//! the right, edit modal and notification on top.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{
    CategoryPanel, EditTaskModal, FilterButtons, NotificationToast, SearchBar, StatsPanel,
    TaskForm, TaskList,
};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    tracing::info!(api_base = %config.api_base, "starting task board");

    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        actions::refresh(ctx);
    });

    view! {
        <div class="container">
            <header class="app-header">
                <h1><i class="fas fa-tasks"></i>" Task Manager"</h1>
                <StatsPanel />
            </header>

            <div class="app-layout">
                <aside class="sidebar">
                    <TaskForm />
                    <CategoryPanel />
                </aside>

                <main class="main-content">
                    <div class="toolbar">
                        <SearchBar />
                        <FilterButtons />
                    </div>
                    <TaskList />
                </main>
            </div>

            <EditTaskModal />
            <NotificationToast />
        </div>
    }
}
