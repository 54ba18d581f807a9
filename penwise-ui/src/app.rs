//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Layout, Toast};
use crate::pages::{
    About, Contact, Dashboard, Documents, Landing, Profile, Settings, SignIn, SignUp, Write,
};
use crate::state::{provide_auth_state, AuthState};
use crate::theme::Palette;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide auth and theme state to all components
    provide_auth_state();

    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <Router>
            <div class=move || format!(
                "min-h-screen transition-colors duration-300 {}",
                Palette::new(auth.dark_mode.get()).shell()
            )>
                <Routes>
                    <Route path="/signin" view=SignIn />
                    <Route path="/signup" view=SignUp />
                    <Route path="/" view=Layout>
                        <Route path="" view=Landing />
                        <Route path="dashboard" view=Dashboard />
                        <Route path="write" view=Write />
                        <Route path="documents" view=Documents />
                        <Route path="settings" view=Settings />
                        <Route path="profile" view=Profile />
                        <Route path="about" view=About />
                        <Route path="contact" view=Contact />
                        <Route path="*any" view=NotFound />
                    </Route>
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] pt-24 text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class=move || format!("text-3xl font-bold mb-2 {}", palette().heading())>"Page Not Found"</h1>
            <p class=move || format!("mb-6 {}", palette().muted())>"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-gradient-to-r from-orange-500 to-pink-500 text-white rounded-full font-medium"
            >
                "Go Home"
            </A>
        </div>
    }
}
