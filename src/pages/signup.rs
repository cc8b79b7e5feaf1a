//! Sign-up page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{AuthLayout, FormError, FormField};
use crate::routes::AppRoute;
use crate::state::AppState;
use crate::validation::validate_signup;

/// Name, email and password registration form
#[component]
pub fn SignUpPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let min_password_len = state.config.min_password_len;

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_signup(&name.get(), &email.get(), &password.get(), min_password_len) {
            Ok(()) => {
                error.set(None);
                tracing::info!("sign-up form accepted");
                navigate(AppRoute::Chat.path(), Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthLayout
            route=AppRoute::SignUp
            title="Create account".to_string()
            subtitle=format!("Sign up to start using {}", state.config.app_name)
        >
            <FormError error=error />

            <form on:submit=on_submit class="auth-form" novalidate=true>
                <FormField label="Full name" value=name placeholder="Ada Lovelace" autocomplete="name" />
                <FormField label="Email" value=email input_type="email" placeholder="you@example.com" autocomplete="email" />
                <FormField label="Password" value=password input_type="password" placeholder="••••••••" autocomplete="new-password" />
                <p class="text-xs text-[var(--text-muted)] -mt-2">
                    {format!("Minimum {} characters", min_password_len)}
                </p>

                <button type="submit" class="btn btn-primary w-full py-3">"Sign up"</button>
            </form>

            <div class="auth-footer">
                "Already have an account? "
                <a href=AppRoute::Login.path() class="auth-link">"Sign in"</a>
            </div>
        </AuthLayout>
    }
}
