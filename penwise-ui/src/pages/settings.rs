//! Settings Page
//!
//! Theme and account preferences.

use leptos::*;
use leptos_router::*;

use crate::state::AuthState;
use crate::theme::Palette;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <div class="pt-24 pb-8 px-4 max-w-3xl mx-auto space-y-8">
            // Header
            <div>
                <h1 class=move || format!("text-3xl font-bold {}", palette().heading())>"Settings"</h1>
                <p class=move || format!("mt-1 {}", palette().body())>"Configure your Penwise experience"</p>
            </div>

            <AppearanceSettings />
            <AccountSettings />
        </div>
    }
}

/// Theme toggle
#[component]
fn AppearanceSettings() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <section class=move || format!("backdrop-blur-md rounded-2xl p-6 border {}", palette().card())>
            <h2 class=move || format!("text-xl font-semibold mb-4 {}", palette().heading())>"Appearance"</h2>

            <div class="flex items-center justify-between">
                <div>
                    <h3 class=move || format!("font-medium {}", palette().heading())>"Dark Mode"</h3>
                    <p class=move || format!("text-sm {}", palette().muted())>
                        "Applies to every page and is remembered on this device"
                    </p>
                </div>
                <button
                    on:click=move |_| auth.toggle_dark_mode()
                    class=move || {
                        let base = "relative w-14 h-8 rounded-full transition-colors";
                        if auth.dark_mode.get() {
                            format!("{} bg-orange-500", base)
                        } else {
                            format!("{} bg-gray-300", base)
                        }
                    }
                >
                    <span class=move || {
                        let base = "absolute top-1 w-6 h-6 bg-white rounded-full shadow transition-all";
                        if auth.dark_mode.get() {
                            format!("{} left-7", base)
                        } else {
                            format!("{} left-1", base)
                        }
                    } />
                </button>
            </div>
        </section>
    }
}

/// Sign-out or sign-in prompt
#[component]
fn AccountSettings() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());
    let navigate = use_navigate();

    let sign_out = move |_: ev::MouseEvent| {
        auth.sign_out();
        navigate("/", Default::default());
    };

    view! {
        <section class=move || format!("backdrop-blur-md rounded-2xl p-6 border {}", palette().card())>
            <h2 class=move || format!("text-xl font-semibold mb-4 {}", palette().heading())>"Account"</h2>

            {move || match auth.user.get() {
                Some(user) => view! {
                    <div class="flex items-center justify-between">
                        <div>
                            <h3 class=move || format!("font-medium {}", palette().heading())>{user.name}</h3>
                            <p class=move || format!("text-sm {}", palette().muted())>{user.email}</p>
                        </div>
                        <button
                            on:click=sign_out.clone()
                            class="px-4 py-2 rounded-lg font-medium bg-red-500 hover:bg-red-600 text-white transition-colors"
                        >
                            "Sign Out"
                        </button>
                    </div>
                }.into_view(),
                None => view! {
                    <p class=move || palette().body()>
                        "You're not signed in. "
                        <A href="/signin" class="text-orange-500 font-semibold">"Sign in"</A>
                    </p>
                }.into_view(),
            }}
        </section>
    }
}
