//! TA Chatbot UI - Leptos single-page frontend
//!
//! Landing page, authentication pages and the chat interface for the
//! textbook teaching-assistant chatbot.

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod theme;
pub mod types;
pub mod validation;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    StaticSegment,
};

use config::AppConfig;
use pages::{
    chat::ChatPage, forgot_password::ForgotPasswordPage, landing::LandingPage, login::LoginPage,
    reset_password::ResetPasswordPage, signup::SignUpPage,
};
use routes::AppRoute;
use state::AppState;
use theme::ThemeProvider;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new(AppConfig::from_env());
    app_state.persist();
    provide_context(app_state);

    view! {
        <Router>
            <NavigationLogger />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment(AppRoute::Landing.segment()) view=LandingPage />
                <Route path=StaticSegment(AppRoute::Chat.segment()) view=ChatPage />
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage />
                <Route path=StaticSegment(AppRoute::SignUp.segment()) view=SignUpPage />
                <Route path=StaticSegment(AppRoute::ForgotPassword.segment()) view=ForgotPasswordPage />
                <Route path=StaticSegment(AppRoute::ResetPassword.segment()) view=ResetPasswordPage />
            </Routes>
        </Router>
    }
}

/// Logs every client-side navigation
#[component]
fn NavigationLogger() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        match AppRoute::from_location(&path) {
            Some(route) => tracing::debug!(%path, ?route, "navigated"),
            None => tracing::warn!(%path, "navigated to unknown path"),
        }
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Title text="Page not found | TA Chatbot" />
        <ThemeProvider mode=state.theme>
            <div class="min-h-screen flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-[var(--text-muted)] mb-4">"404"</h1>
                    <p class="text-xl text-[var(--text-secondary)] mb-8">"Page not found"</p>
                    <a href=AppRoute::Landing.path() class="btn btn-primary px-6 py-3">
                        "Go Home"
                    </a>
                </div>
            </div>
        </ThemeProvider>
    }
}
