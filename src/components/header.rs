//! Header component

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::routes::AppRoute;
use crate::state::AppState;

/// Header shared by the auth and chat pages
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header class="header h-16 sticky top-0 z-40 border-b border-[var(--border-default)]">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Logo
                <a href=AppRoute::Landing.path() class="logo hover:opacity-80 transition-opacity">
                    <span class="logo-mark">"🎓"</span>
                    <div>
                        <h1 class="text-xl font-bold text-gradient">{state.config.app_name}</h1>
                        <p class="text-xs text-[var(--text-muted)] -mt-0.5">{state.config.tagline}</p>
                    </div>
                </a>

                // Navigation
                <nav class="flex items-center gap-2">
                    <a href=AppRoute::Chat.path() class="btn btn-ghost">"Chat"</a>
                    <a href=AppRoute::Login.path() class="btn btn-ghost">"Sign in"</a>
                    <a href=AppRoute::SignUp.path() class="btn btn-primary">"Sign up"</a>
                    <ThemeToggle />
                </nav>
            </div>
        </header>
    }
}
