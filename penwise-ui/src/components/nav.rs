//! Navigation Components
//!
//! Layout shell shared by every page except sign-in/sign-up: header
//! navigation with theme toggle and account links, then the routed page.

use leptos::*;
use leptos_router::*;

use crate::state::AuthState;
use crate::theme::Palette;

/// Layout wrapping the nested routes
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Outlet />
        </main>
    }
}

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let palette = move || Palette::new(auth.dark_mode.get());

    view! {
        <nav class=move || format!(
            "fixed top-0 left-0 right-0 z-40 backdrop-blur-md border-b transition-colors {}",
            palette().nav()
        )>
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🪶"</span>
                        <span class="text-xl font-bold bg-gradient-to-r from-orange-500 to-pink-500 bg-clip-text text-transparent">
                            "Penwise"
                        </span>
                    </A>

                    // Navigation links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink href="/dashboard" label="Dashboard" />
                        <NavLink href="/write" label="Write" />
                        <NavLink href="/documents" label="Documents" />
                        <NavLink href="/about" label="About" />
                        <NavLink href="/contact" label="Contact" />
                    </div>

                    // Theme toggle and account
                    <div class="flex items-center space-x-2">
                        <button
                            on:click=move |_| auth.toggle_dark_mode()
                            title="Toggle dark mode"
                            class=move || format!("px-3 py-2 rounded-full transition-colors {}", palette().body())
                        >
                            {move || if auth.dark_mode.get() { "☀️" } else { "🌙" }}
                        </button>
                        {move || match auth.user.get() {
                            Some(user) => view! {
                                <NavLink href="/settings" label="Settings" />
                                <A href="/profile" class="px-4 py-2 rounded-full bg-gradient-to-r from-orange-500 to-pink-500 text-white font-semibold">
                                    {user.name}
                                </A>
                            }.into_view(),
                            None => view! {
                                <A href="/signin" class="px-4 py-2 rounded-full bg-gradient-to-r from-orange-500 to-pink-500 text-white font-semibold">
                                    "Sign In"
                                </A>
                            }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-500 hover:text-orange-500 transition-colors"
            active_class="text-orange-500 font-semibold"
        >
            {label}
        </A>
    }
}
