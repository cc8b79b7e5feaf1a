//! Theme mode toggle button

use leptos::prelude::*;

use crate::state::AppState;
use crate::theme::ThemeMode;

/// Flips between dark and light mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<AppState>();
    let theme = state.theme;

    let label = move || match theme.get() {
        ThemeMode::Dark => "Switch to light mode",
        ThemeMode::Light => "Switch to dark mode",
    };

    view! {
        <button
            on:click=move |_| {
                state.toggle_theme();
                tracing::debug!(mode = %theme.get_untracked(), "theme toggled");
            }
            class="btn btn-ghost p-2"
            title=label
            aria-label=label
        >
            {move || match theme.get() {
                ThemeMode::Dark => "☀️",
                ThemeMode::Light => "🌙",
            }}
        </button>
    }
}
