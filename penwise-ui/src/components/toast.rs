//! Toast
//!
//! Floating notices for sign-in, sign-up and sign-out. Each notice clears
//! itself on a timer (see [`AuthState::show_success`]) or when dismissed.

use leptos::*;

use crate::state::AuthState;
use crate::theme::{toast_class, Notice};

#[component]
pub fn Toast() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <div class="fixed top-20 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2">
            {move || auth.success.get().map(|message| view! {
                <Notification message=message notice=Notice::Success source=auth.success />
            })}
            {move || auth.error.get().map(|message| view! {
                <Notification message=message notice=Notice::Error source=auth.error />
            })}
        </div>
    }
}

/// One notice; the close button empties `source` ahead of its timer
#[component]
fn Notification(
    message: String,
    notice: Notice,
    source: RwSignal<Option<String>>,
) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <div
            role="status"
            class=move || format!(
                "flex items-center gap-3 pl-4 pr-2 py-2 rounded-full shadow-lg backdrop-blur-md {}",
                toast_class(notice, auth.dark_mode.get())
            )
        >
            <span class="text-sm font-semibold">{message}</span>
            <button
                on:click=move |_| source.set(None)
                class="w-7 h-7 rounded-full text-sm hover:bg-black/10"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}
