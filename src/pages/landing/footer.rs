//! Landing page footer

use chrono::Datelike;
use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::AppState;

/// Brand, site links and copyright
#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<AppState>();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="py-12 px-4 text-[var(--text-muted)]">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between gap-8">
                <div>
                    <p class="text-lg font-bold text-gradient">{state.config.app_name}</p>
                    <p class="text-sm mt-1">{state.config.tagline}</p>
                </div>

                <div class="grid grid-cols-2 gap-8 text-sm">
                    <div class="flex flex-col gap-2">
                        <span class="font-semibold text-[var(--text-primary)]">"Product"</span>
                        <a href="#highlights" class="hover:text-[var(--text-primary)]">"Highlights"</a>
                        <a href="#faq" class="hover:text-[var(--text-primary)]">"FAQs"</a>
                        <a href=AppRoute::Chat.path() class="hover:text-[var(--text-primary)]">"Chat"</a>
                    </div>
                    <div class="flex flex-col gap-2">
                        <span class="font-semibold text-[var(--text-primary)]">"Account"</span>
                        <a href=AppRoute::Login.path() class="hover:text-[var(--text-primary)]">"Sign in"</a>
                        <a href=AppRoute::SignUp.path() class="hover:text-[var(--text-primary)]">"Sign up"</a>
                        <a href=AppRoute::ForgotPassword.path() class="hover:text-[var(--text-primary)]">"Forgot password"</a>
                    </div>
                </div>
            </div>

            <p class="max-w-6xl mx-auto mt-10 pt-6 border-t border-[var(--border-default)] text-xs">
                {format!("Copyright © {} {}", year, state.config.app_name)}
            </p>
        </footer>
    }
}
