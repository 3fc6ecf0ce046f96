//! Notification Toast Component

use leptos::prelude::*;

use crate::context::{use_app_context, NotificationKind};

#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notification.get().map(|notification| {
            let icon = match notification.kind {
                NotificationKind::Success => "fas fa-check-circle",
                NotificationKind::Error => "fas fa-exclamation-circle",
            };
            view! {
                <div class=notification.kind.css_class() role="status">
                    <div class="notification-content">
                        <i class=icon></i>
                        <span>{notification.message}</span>
                    </div>
                    <button
                        type="button"
                        class="notification-close"
                        on:click=move |_| ctx.dismiss_notification()
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }
        })}
    }
}
