//! Documents Page
//!
//! Document listing. Drafts are not persisted, so the list is always the
//! empty state pointing back to Write mode.

use leptos::*;
use leptos_router::*;

use crate::state::AuthState;
use crate::theme::Palette;

#[component]
pub fn Documents() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <div class="pt-24 pb-8 px-4 max-w-5xl mx-auto space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class=move || format!("text-3xl font-bold {}", palette().heading())>"Documents"</h1>
                    <p class=move || format!("mt-1 {}", palette().body())>"Everything you've written"</p>
                </div>
                <A
                    href="/write"
                    class="px-6 py-2 bg-gradient-to-r from-orange-500 to-pink-500 text-white rounded-full font-semibold"
                >
                    "New Document"
                </A>
            </div>

            <div class=move || format!(
                "backdrop-blur-md rounded-2xl p-12 border text-center {}",
                palette().card()
            )>
                <div class="text-5xl mb-4">"📄"</div>
                <h2 class=move || format!("text-xl font-semibold mb-2 {}", palette().heading())>
                    "No documents yet"
                </h2>
                <p class=move || palette().muted()>
                    "Drafts live only while Write mode is open."
                </p>
            </div>
        </div>
    }
}
