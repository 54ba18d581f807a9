//! Dashboard Page
//!
//! Signed-in home: greeting and shortcuts into the app.

use leptos::*;
use leptos_router::*;
use penwise::editor::DAILY_WORD_GOAL;

use crate::state::AuthState;
use crate::theme::Palette;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    let greeting = move || {
        auth.user
            .get()
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_else(|| "Welcome to Penwise".to_string())
    };

    view! {
        <div class="pt-24 pb-8 px-4 max-w-6xl mx-auto space-y-8">
            // Page header
            <div>
                <h1 class=move || format!("text-3xl font-bold {}", palette().heading())>{greeting}</h1>
                <p class=move || format!("mt-1 {}", palette().body())>
                    {format!("Today's goal: {} words", DAILY_WORD_GOAL)}
                </p>
            </div>

            <section class="grid md:grid-cols-3 gap-6">
                <Shortcut href="/write" icon="✍️" title="New Draft" text="Open Write mode and start typing." />
                <Shortcut href="/documents" icon="📚" title="Documents" text="Browse your drafts." />
                <Shortcut href="/settings" icon="⚙️" title="Settings" text="Theme and account preferences." />
            </section>
        </div>
    }
}

#[component]
fn Shortcut(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <A href=href>
            <div class=move || format!(
                "backdrop-blur-md rounded-2xl p-6 border hover:border-orange-400 transition-colors {}",
                palette().card()
            )>
                <div class="text-3xl mb-3">{icon}</div>
                <h3 class=move || format!("text-lg font-bold {}", palette().heading())>{title}</h3>
                <p class=move || format!("text-sm {}", palette().body())>{text}</p>
            </div>
        </A>
    }
}
