//! Editor Controls
//!
//! Buttons and stat rows used by the Write page sidebar.

use leptos::*;

use crate::theme::{action_button_class, control_button_class, Palette};

/// Toggle button for an input modality
#[component]
pub fn ControlButton(
    #[prop(into)]
    active: Signal<bool>,
    #[prop(default = true)]
    enabled: bool,
    #[prop(into)]
    dark_mode: Signal<bool>,
    icon: &'static str,
    label: &'static str,
    #[prop(into)]
    on_click: Callback<ev::MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |ev| on_click.call(ev)
            disabled=!enabled
            class=move || format!(
                "w-full flex items-center justify-center space-x-3 px-4 py-3 rounded-xl transition-all duration-200 {}",
                control_button_class(active.get(), enabled, dark_mode.get())
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="font-medium">{label}</span>
        </button>
    }
}

/// Quick action button
#[component]
pub fn ActionButton(
    #[prop(into)]
    dark_mode: Signal<bool>,
    icon: &'static str,
    label: &'static str,
    #[prop(into)]
    on_click: Callback<ev::MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |ev| on_click.call(ev)
            class=move || format!(
                "w-full flex items-center space-x-3 px-4 py-2 rounded-lg transition-colors {}",
                action_button_class(dark_mode.get())
            )
        >
            <span>{icon}</span>
            <span class="font-medium">{label}</span>
        </button>
    }
}

/// Label/value row in the stats card
#[component]
pub fn StatItem(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    dark_mode: Signal<bool>,
) -> impl IntoView {
    let palette = move || Palette::new(dark_mode.get());

    view! {
        <div class="flex justify-between items-center">
            <span class=move || palette().stat_label()>{label}</span>
            <span class=move || palette().stat_value()>{move || value.get()}</span>
        </div>
    }
}
