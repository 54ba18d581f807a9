//! Write Page
//!
//! Editor surface: title and body inputs, voice/gesture toggles, quick
//! actions and live writing stats. All state lives in one
//! [`EditorSession`] owned by this page and dropped on navigation.

use leptos::*;
use penwise::editor::{EditorSession, QuickAction, SessionContext};
use wasm_bindgen::JsValue;

use crate::components::{ActionButton, ControlButton, StatItem};
use crate::state::AuthState;
use crate::theme::Palette;

/// Write page component
#[component]
pub fn Write() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let shared_dark_mode = auth.dark_mode;

    let session = create_rw_signal(EditorSession::new(SessionContext {
        dark_mode: shared_dark_mode.get_untracked(),
        ..SessionContext::default()
    }));

    // The theme is owned by the auth context; hand the session a fresh
    // context whenever it changes.
    create_effect(move |_| {
        let dark = shared_dark_mode.get();
        if session.with_untracked(|s| s.dark_mode()) != dark {
            session.update(|s| {
                let goals = s.context().goals;
                s.replace_context(SessionContext::new(dark, goals));
            });
        }
    });

    let metrics = create_memo(move |_| session.with(|s| s.compute_metrics()));
    let goal = create_memo(move |_| session.with(|s| s.goal_progress()));
    let dark_mode = Signal::derive(move || session.with(|s| s.dark_mode()));
    let palette = move || Palette::new(dark_mode.get());

    let quick_action = move |action: QuickAction| {
        let outcome = session.with_untracked(|s| s.trigger(action));
        let line = format!("{}: {:?}", action.label(), outcome);
        web_sys::console::log_1(&JsValue::from_str(&line));
    };

    let opened_at = session.with_untracked(|s| {
        s.opened_at()
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    });

    view! {
        <div class=move || format!(
            "min-h-screen pt-24 pb-8 px-4 sm:px-6 lg:px-8 transition-colors duration-300 {}",
            palette().page()
        )>
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col lg:flex-row gap-8">
                    // Main writing area
                    <div class="flex-1">
                        <div class=move || format!(
                            "backdrop-blur-md rounded-2xl border transition-colors duration-300 {}",
                            palette().card()
                        )>
                            // Header
                            <div class=move || format!("p-6 border-b transition-colors {}", palette().divider())>
                                <div class="flex items-center justify-between">
                                    <div class="flex-1">
                                        <h1 class=move || format!("text-3xl font-bold mb-2 {}", palette().heading())>
                                            <span class="bg-gradient-to-r from-orange-500 to-pink-500 bg-clip-text text-transparent">
                                                "Write"
                                            </span>
                                            " Mode"
                                        </h1>
                                        <p class=move || palette().body()>
                                            "Express your ideas with voice, gestures, or keyboard"
                                        </p>
                                    </div>
                                    <div class="flex items-center space-x-2">
                                        <span class=move || format!("text-sm {}", palette().body())>
                                            {move || format!("{} words", metrics.get().word_count)}
                                        </span>
                                        <button
                                            on:click=move |_| quick_action(QuickAction::Save)
                                            class="px-6 py-2 bg-gradient-to-r from-orange-500 to-pink-500 text-white rounded-full
                                                   font-semibold hover:from-orange-600 hover:to-pink-600 transition-all duration-200"
                                        >
                                            {QuickAction::Save.label()}
                                        </button>
                                    </div>
                                </div>
                            </div>

                            // Document title
                            <div class=move || format!("p-6 border-b transition-colors {}", palette().divider())>
                                <input
                                    type="text"
                                    placeholder="Enter document title..."
                                    prop:value=move || session.with(|s| s.title().to_string())
                                    on:input=move |ev| session.update(|s| s.set_title(event_target_value(&ev)))
                                    class=move || format!(
                                        "w-full text-2xl font-semibold bg-transparent border-none outline-none placeholder-gray-400 {}",
                                        palette().heading()
                                    )
                                />
                            </div>

                            // Writing area
                            <div class="p-6">
                                <textarea
                                    placeholder="Start writing... Use voice commands or gestures for a hands-free experience."
                                    prop:value=move || session.with(|s| s.body().to_string())
                                    on:input=move |ev| session.update(|s| s.set_body(event_target_value(&ev)))
                                    class=move || format!(
                                        "w-full h-96 text-lg bg-transparent border-none outline-none resize-none \
                                         leading-relaxed placeholder-gray-400 {}",
                                        palette().heading()
                                    )
                                ></textarea>
                            </div>
                        </div>
                    </div>

                    // Sidebar controls
                    <div class="lg:w-80 space-y-6">
                        // Input controls
                        <div class=move || format!(
                            "backdrop-blur-md rounded-2xl p-6 border transition-colors duration-300 {}",
                            palette().card()
                        )>
                            <h3 class=move || format!("text-xl font-bold mb-4 flex items-center {}", palette().heading())>
                                <span class="mr-2">"✨"</span>
                                "Input Controls"
                            </h3>

                            <div class="space-y-4">
                                <ControlButton
                                    active=Signal::derive(move || session.with(|s| s.voice_active()))
                                    dark_mode=dark_mode
                                    icon="🎤"
                                    label="Start Voice"
                                    on_click=move |_: ev::MouseEvent| session.update(|s| s.toggle_voice())
                                />
                                <ControlButton
                                    active=Signal::derive(move || session.with(|s| s.gesture_active()))
                                    dark_mode=dark_mode
                                    icon="✋"
                                    label="Start Gestures"
                                    on_click=move |_: ev::MouseEvent| session.update(|s| s.toggle_gesture())
                                />
                            </div>

                            <div class=move || format!("mt-6 pt-6 border-t {}", palette().divider())>
                                <h4 class=move || format!("font-semibold mb-3 {}", palette().heading())>
                                    "Quick Actions:"
                                </h4>
                                <div class="space-y-2">
                                    <ActionButton
                                        dark_mode=dark_mode
                                        icon="🔊"
                                        label=QuickAction::ReadAloud.label()
                                        on_click=move |_: ev::MouseEvent| quick_action(QuickAction::ReadAloud)
                                    />
                                    <ActionButton
                                        dark_mode=dark_mode
                                        icon="✨"
                                        label=QuickAction::AiSuggest.label()
                                        on_click=move |_: ev::MouseEvent| quick_action(QuickAction::AiSuggest)
                                    />
                                </div>
                            </div>
                        </div>

                        // Writing stats
                        <div class=move || format!(
                            "backdrop-blur-md rounded-2xl p-6 border transition-colors duration-300 {}",
                            palette().card()
                        )>
                            <h3 class=move || format!("text-xl font-bold mb-4 flex items-center {}", palette().heading())>
                                <span class="mr-2">"📄"</span>
                                "Writing Stats"
                            </h3>

                            <div class="space-y-4">
                                <StatItem
                                    label="Words:"
                                    value=Signal::derive(move || metrics.get().word_count.to_string())
                                    dark_mode=dark_mode
                                />
                                <StatItem
                                    label="Characters:"
                                    value=Signal::derive(move || metrics.get().character_count.to_string())
                                    dark_mode=dark_mode
                                />
                                <StatItem
                                    label="Reading time:"
                                    value=Signal::derive(move || format!("{} min", metrics.get().reading_time_minutes))
                                    dark_mode=dark_mode
                                />

                                <div class=move || format!("pt-4 border-t {}", palette().divider())>
                                    <div class="flex justify-between items-center mb-2">
                                        <span class=move || palette().stat_label()>"Daily Goal"</span>
                                        <span class=move || palette().stat_value()>
                                            {move || format!("{}%", goal.get().whole_percent())}
                                        </span>
                                    </div>
                                    <div class=move || format!("text-sm mb-2 {}", palette().muted())>
                                        {move || format!("Target: {} words", goal.get().target_words)}
                                    </div>
                                    <div class="w-full bg-gray-200 rounded-full h-2">
                                        <div
                                            class="bg-gradient-to-r from-orange-500 to-pink-500 h-2 rounded-full transition-all duration-300"
                                            style=move || format!("width: {}%", goal.get().percent)
                                        />
                                    </div>
                                    <div class=move || format!("text-xs mt-3 {}", palette().muted())>
                                        {format!("Session started at {}", opened_at)}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
