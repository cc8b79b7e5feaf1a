//! Reset-password page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{AuthLayout, FormError, FormField};
use crate::routes::AppRoute;
use crate::state::AppState;
use crate::validation::validate_reset;

/// New password form with confirmation
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let min_password_len = state.config.min_password_len;

    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_reset(&password.get(), &confirmation.get(), min_password_len) {
            Ok(()) => {
                error.set(None);
                tracing::info!("password reset form accepted");
                navigate(AppRoute::Login.path(), Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthLayout
            route=AppRoute::ResetPassword
            title="Reset password".to_string()
            subtitle="Choose a new password for your account".to_string()
        >
            <FormError error=error />

            <form on:submit=on_submit class="auth-form" novalidate=true>
                <FormField label="New password" value=password input_type="password" placeholder="••••••••" autocomplete="new-password" />
                <FormField label="Confirm password" value=confirmation input_type="password" placeholder="••••••••" autocomplete="new-password" />
                <button type="submit" class="btn btn-primary w-full py-3">"Reset password"</button>
            </form>

            <div class="auth-footer">
                <a href=AppRoute::Login.path() class="auth-link">"Back to sign in"</a>
            </div>
        </AuthLayout>
    }
}
