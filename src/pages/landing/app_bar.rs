//! Landing page app bar

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::routes::AppRoute;
use crate::state::AppState;

/// In-page anchors shown in the app bar
const NAV_LINKS: [(&str, &str); 2] = [("Highlights", "#highlights"), ("FAQ", "#faq")];

/// Sticky top bar with section anchors, account links and the theme toggle
#[component]
pub fn AppBar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let menu_open = RwSignal::new(false);

    view! {
        <header class="app-bar sticky top-0 z-40 glass border-b border-[var(--border-default)]">
            <div class="h-16 max-w-7xl mx-auto px-4 flex items-center justify-between">
                <div class="flex items-center gap-6">
                    <a href=AppRoute::Landing.path() class="logo text-lg font-bold text-gradient">
                        {state.config.app_name}
                    </a>
                    <nav class="hidden md:flex items-center gap-1">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <a href=*href class="btn btn-ghost text-sm">{*label}</a>
                        }).collect::<Vec<_>>()}
                    </nav>
                </div>

                <div class="hidden md:flex items-center gap-2">
                    <ThemeToggle />
                    <a href=AppRoute::Login.path() class="btn btn-ghost">"Sign in"</a>
                    <a href=AppRoute::SignUp.path() class="btn btn-primary">"Sign up"</a>
                </div>

                // Mobile menu button
                <button
                    class="md:hidden btn btn-ghost p-2"
                    aria-label="Menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="md:hidden px-4 pb-4 flex flex-col gap-2 animate-fade-in-down">
                    {NAV_LINKS.iter().map(|(label, href)| view! {
                        <a href=*href class="btn btn-ghost justify-start" on:click=move |_| menu_open.set(false)>
                            {*label}
                        </a>
                    }).collect::<Vec<_>>()}
                    <a href=AppRoute::Login.path() class="btn btn-ghost justify-start">"Sign in"</a>
                    <a href=AppRoute::SignUp.path() class="btn btn-primary">"Sign up"</a>
                    <ThemeToggle />
                </nav>
            </Show>
        </header>
    }
}
