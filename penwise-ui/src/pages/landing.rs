//! Landing Page
//!
//! Marketing hero and feature overview.

use leptos::*;
use leptos_router::*;

use crate::state::AuthState;
use crate::theme::Palette;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🎤", "Voice Ready", "Switch on voice input when your hands are busy."),
    ("✋", "Gesture Ready", "Flip to gestures for a hands-free flow."),
    ("📊", "Live Stats", "Words, characters, reading time and your daily goal as you type."),
];

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <div class="pt-32 pb-16 px-4">
            // Hero
            <section class="max-w-4xl mx-auto text-center">
                <h1 class=move || format!("text-5xl md:text-6xl font-bold mb-6 {}", palette().heading())>
                    "Write "
                    <span class="bg-gradient-to-r from-orange-500 to-pink-500 bg-clip-text text-transparent">
                        "your way"
                    </span>
                </h1>
                <p class=move || format!("text-xl mb-10 {}", palette().body())>
                    "Penwise is a calm place to draft, with voice and gesture modes and stats that keep you moving."
                </p>
                <div class="flex justify-center space-x-4">
                    <A
                        href="/write"
                        class="px-8 py-3 bg-gradient-to-r from-orange-500 to-pink-500 text-white rounded-full font-semibold"
                    >
                        "Start Writing"
                    </A>
                    <A
                        href="/signup"
                        class="px-8 py-3 rounded-full font-semibold border border-orange-400 text-orange-500"
                    >
                        "Create Account"
                    </A>
                </div>
            </section>

            // Features
            <section class="max-w-6xl mx-auto mt-20 grid md:grid-cols-3 gap-6">
                {FEATURES.into_iter().map(|(icon, title, text)| view! {
                    <div class=move || format!("backdrop-blur-md rounded-2xl p-6 border {}", palette().card())>
                        <div class="text-3xl mb-3">{icon}</div>
                        <h3 class=move || format!("text-xl font-bold mb-2 {}", palette().heading())>{title}</h3>
                        <p class=move || palette().body()>{text}</p>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
