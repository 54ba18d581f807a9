//! About Page

use leptos::*;

use crate::state::AuthState;
use crate::theme::Palette;

#[component]
pub fn About() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <div class="pt-24 pb-8 px-4 max-w-4xl mx-auto space-y-8">
            <h1 class=move || format!("text-4xl font-bold {}", palette().heading())>
                "About "
                <span class="bg-gradient-to-r from-orange-500 to-pink-500 bg-clip-text text-transparent">
                    "Penwise"
                </span>
            </h1>

            <section class=move || format!("backdrop-blur-md rounded-2xl p-6 border space-y-4 {}", palette().card())>
                <p class=move || palette().body()>
                    "Penwise is a writing space built around focus. Type, or switch on voice and "
                    "gesture modes when you want to step away from the keyboard."
                </p>

                <div class="grid md:grid-cols-2 gap-4 text-sm">
                    <div>
                        <h3 class=move || format!("font-medium mb-2 {}", palette().heading())>"Built With"</h3>
                        <ul class=move || format!("space-y-1 {}", palette().muted())>
                            <li>"• Rust (Core & Frontend)"</li>
                            <li>"• Leptos (WASM UI Framework)"</li>
                            <li>"• Tailwind CSS"</li>
                        </ul>
                    </div>
                    <div>
                        <h3 class=move || format!("font-medium mb-2 {}", palette().heading())>"Features"</h3>
                        <ul class=move || format!("space-y-1 {}", palette().muted())>
                            <li>"• Live writing stats"</li>
                            <li>"• Daily word goal"</li>
                            <li>"• Light & dark themes"</li>
                        </ul>
                    </div>
                </div>

                <p class=move || format!("text-sm {}", palette().muted())>
                    {format!("Version {}", env!("CARGO_PKG_VERSION"))}
                </p>
            </section>
        </div>
    }
}
