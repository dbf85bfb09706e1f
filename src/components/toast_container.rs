//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::util::toast::dismiss;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=format!("toast {}", toast.severity.css_modifier())>
                            <span class="toast__icon">{toast.severity.icon()}</span>
                            <span class="toast__text">{toast.text}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| dismiss(toasts, &id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
