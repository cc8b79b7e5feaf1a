//! Forgot-password page

use leptos::prelude::*;

use crate::components::{AuthLayout, FormError, FormField};
use crate::routes::AppRoute;
use crate::validation::validate_email;

/// Collects an email address and confirms that reset instructions are on their way
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_email(&email.get()) {
            Ok(()) => {
                error.set(None);
                submitted.set(true);
                tracing::info!("password reset requested");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let subtitle = Signal::derive(move || {
        if submitted.get() {
            "Check your inbox".to_string()
        } else {
            "Enter your email and we'll send you a reset link".to_string()
        }
    });

    view! {
        <AuthLayout route=AppRoute::ForgotPassword title="Forgot password".to_string() subtitle=subtitle>
            <Show
                when=move || submitted.get()
                fallback=move || view! {
                    <FormError error=error />
                    <form on:submit=on_submit class="auth-form" novalidate=true>
                        <FormField label="Email" value=email input_type="email" placeholder="you@example.com" autocomplete="email" />
                        <button type="submit" class="btn btn-primary w-full py-3">"Send reset link"</button>
                    </form>
                }
            >
                <p class="text-sm text-[var(--text-secondary)] animate-fade-in">
                    "If an account exists for "
                    <strong>{move || email.get().trim().to_string()}</strong>
                    ", you will receive an email with instructions to reset your password."
                </p>
            </Show>

            <div class="auth-footer">
                <a href=AppRoute::Login.path() class="auth-link">"Back to sign in"</a>
            </div>
        </AuthLayout>
    }
}
