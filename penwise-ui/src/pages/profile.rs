//! Profile Page

use leptos::*;
use leptos_router::*;

use crate::state::AuthState;
use crate::theme::Palette;

#[component]
pub fn Profile() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <div class="pt-24 pb-8 px-4 max-w-3xl mx-auto">
            <div class=move || format!("backdrop-blur-md rounded-2xl p-8 border {}", palette().card())>
                {move || match auth.user.get() {
                    Some(user) => {
                        let initial = user.name.chars().next().unwrap_or('?').to_uppercase().to_string();
                        view! {
                            <div class="flex items-center space-x-6">
                                <div class="w-20 h-20 rounded-full bg-gradient-to-r from-orange-500 to-pink-500
                                            flex items-center justify-center text-3xl font-bold text-white">
                                    {initial}
                                </div>
                                <div>
                                    <h1 class=move || format!("text-3xl font-bold {}", palette().heading())>{user.name}</h1>
                                    <p class=move || palette().muted()>{user.email}</p>
                                </div>
                            </div>
                        }.into_view()
                    }
                    None => view! {
                        <div class="text-center">
                            <h1 class=move || format!("text-2xl font-bold mb-2 {}", palette().heading())>
                                "No profile yet"
                            </h1>
                            <p class=move || format!("mb-6 {}", palette().body())>
                                "Sign in to see your profile."
                            </p>
                            <A
                                href="/signin"
                                class="px-6 py-3 bg-gradient-to-r from-orange-500 to-pink-500 text-white rounded-full font-semibold"
                            >
                                "Sign In"
                            </A>
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
