//! Sign-in and Sign-up Pages
//!
//! Standalone forms outside the layout shell. Validation failures are
//! shown inline and as a toast; success navigates to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::state::AuthState;
use crate::theme::Palette;

/// Sign-in page component
#[component]
pub fn SignIn() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match auth.sign_in(&email.get(), &password.get()) {
            Ok(()) => {
                set_form_error.set(None);
                navigate("/dashboard", Default::default());
            }
            Err(e) => {
                auth.show_error(&e);
                set_form_error.set(Some(e));
            }
        }
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Sign in to keep writing">
            <form on:submit=on_submit class="space-y-4">
                <Field label="Email" kind="email" value=email set_value=set_email />
                <Field label="Password" kind="password" value=password set_value=set_password />
                <FormError error=form_error />
                <SubmitButton label="Sign In" />
            </form>
            <p class="text-sm text-center mt-6 text-gray-500">
                "New to Penwise? "
                <A href="/signup" class="text-orange-500 font-semibold">"Create an account"</A>
            </p>
        </AuthCard>
    }
}

/// Sign-up page component
#[component]
pub fn SignUp() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match auth.sign_up(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(()) => {
                set_form_error.set(None);
                navigate("/dashboard", Default::default());
            }
            Err(e) => {
                auth.show_error(&e);
                set_form_error.set(Some(e));
            }
        }
    };

    view! {
        <AuthCard title="Create your account" subtitle="Start writing in minutes">
            <form on:submit=on_submit class="space-y-4">
                <Field label="Name" kind="text" value=name set_value=set_name />
                <Field label="Email" kind="email" value=email set_value=set_email />
                <Field label="Password" kind="password" value=password set_value=set_password />
                <Field label="Confirm password" kind="password" value=confirm set_value=set_confirm />
                <FormError error=form_error />
                <SubmitButton label="Sign Up" />
            </form>
            <p class="text-sm text-center mt-6 text-gray-500">
                "Already have an account? "
                <A href="/signin" class="text-orange-500 font-semibold">"Sign in"</A>
            </p>
        </AuthCard>
    }
}

/// Centered card shared by both forms
#[component]
fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class=move || format!(
                "w-full max-w-md backdrop-blur-md rounded-2xl p-8 border {}",
                palette().card()
            )>
                <A href="/" class="block text-center text-2xl font-bold mb-6 bg-gradient-to-r from-orange-500 to-pink-500 bg-clip-text text-transparent">
                    "Penwise"
                </A>
                <h1 class=move || format!("text-3xl font-bold text-center {}", palette().heading())>{title}</h1>
                <p class=move || format!("text-center mb-8 {}", palette().body())>{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

/// Labelled input bound to a signal pair
#[component]
pub fn Field(
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <div>
            <label class=move || format!(
                "block text-sm mb-2 {}",
                Palette::new(auth.dark_mode.get()).muted()
            )>
                {label}
            </label>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=move || format!(
                    "w-full rounded-lg px-4 py-3 border focus:outline-none {}",
                    Palette::new(auth.dark_mode.get()).input()
                )
            />
        </div>
    }
}

/// Inline form error
#[component]
pub fn FormError(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <p class="text-sm text-red-500">{e}</p>
        })}
    }
}

#[component]
fn SubmitButton(label: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full py-3 bg-gradient-to-r from-orange-500 to-pink-500 text-white rounded-full
                   font-semibold hover:from-orange-600 hover:to-pink-600 transition-all duration-200"
        >
            {label}
        </button>
    }
}
