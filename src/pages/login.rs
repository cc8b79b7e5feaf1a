//! Login page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{AuthLayout, FormError, FormField};
use crate::routes::AppRoute;
use crate::state::AppState;
use crate::validation::validate_login;

/// Email and password sign-in form
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let min_password_len = state.config.min_password_len;

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_login(&email.get(), &password.get(), min_password_len) {
            Ok(()) => {
                error.set(None);
                tracing::info!(remember = remember.get(), "login form accepted");
                navigate(AppRoute::Chat.path(), Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthLayout
            route=AppRoute::Login
            title="Welcome back".to_string()
            subtitle="Sign in to continue".to_string()
        >
            <FormError error=error />

            <form on:submit=on_submit class="auth-form" novalidate=true>
                <FormField label="Email" value=email input_type="email" placeholder="you@example.com" autocomplete="email" />
                <FormField label="Password" value=password input_type="password" placeholder="••••••••" autocomplete="current-password" />

                <div class="flex items-center justify-between text-sm">
                    <label class="flex items-center gap-2 text-[var(--text-secondary)]">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <a href=AppRoute::ForgotPassword.path() class="auth-link">"Forgot your password?"</a>
                </div>

                <button type="submit" class="btn btn-primary w-full py-3">"Sign in"</button>
            </form>

            <div class="auth-footer">
                "Don't have an account? "
                <a href=AppRoute::SignUp.path() class="auth-link">"Sign up"</a>
            </div>
        </AuthLayout>
    }
}
