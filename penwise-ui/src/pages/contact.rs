//! Contact Page
//!
//! Contact form. Messages are validated and acknowledged locally; nothing
//! is sent anywhere.

use leptos::*;

use crate::pages::auth::{Field, FormError};
use crate::state::auth::validate_email;
use crate::state::AuthState;
use crate::theme::Palette;

pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    validate_email(email)?;
    if message.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }
    Ok(())
}

#[component]
pub fn Contact() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match validate_contact(&name.get(), &email.get(), &message.get()) {
            Ok(()) => {
                auth.show_success(&format!("Thanks, {}! We'll be in touch.", name.get().trim()));
                set_form_error.set(None);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
            Err(e) => set_form_error.set(Some(e)),
        }
    };

    view! {
        <div class="pt-24 pb-8 px-4 max-w-2xl mx-auto space-y-8">
            <div>
                <h1 class=move || format!("text-3xl font-bold {}", palette().heading())>"Contact Us"</h1>
                <p class=move || format!("mt-1 {}", palette().body())>"Questions, ideas or feedback"</p>
            </div>

            <form
                on:submit=on_submit
                class=move || format!("backdrop-blur-md rounded-2xl p-6 border space-y-4 {}", palette().card())
            >
                <Field label="Name" kind="text" value=name set_value=set_name />
                <Field label="Email" kind="email" value=email set_value=set_email />
                <div>
                    <label class=move || format!("block text-sm mb-2 {}", palette().muted())>"Message"</label>
                    <textarea
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        class=move || format!(
                            "w-full rounded-lg px-4 py-3 border focus:outline-none resize-none {}",
                            palette().input()
                        )
                    ></textarea>
                </div>
                <FormError error=form_error />
                <button
                    type="submit"
                    class="w-full py-3 bg-gradient-to-r from-orange-500 to-pink-500 text-white rounded-full font-semibold"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
