//! Building blocks shared by the authentication pages

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::Header;
use crate::routes::AppRoute;
use crate::state::AppState;
use crate::theme::ThemeProvider;

/// Page shell: themed background, header and a centred card
#[component]
pub fn AuthLayout(
    route: AppRoute,
    /// Card heading
    #[prop(into)]
    title: Signal<String>,
    /// Line under the heading
    #[prop(into)]
    subtitle: Signal<String>,
    children: Children,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Title text=route.title() />
        <ThemeProvider mode=state.theme>
            <div class="min-h-screen flex flex-col">
                <Header />

                <main class="auth-container flex-1">
                    <div class="w-full max-w-md px-4">
                        <div class="auth-card">
                            <div class="auth-header">
                                <h1 class="auth-title text-gradient">{move || title.get()}</h1>
                                <p class="auth-subtitle">{move || subtitle.get()}</p>
                            </div>
                            {children()}
                        </div>
                    </div>
                </main>
            </div>
        </ThemeProvider>
    }
}

/// Labelled text input bound to a signal
#[component]
pub fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div class="auth-input-group">
            <label class="auth-label">{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                placeholder=placeholder
                autocomplete=autocomplete
                class="input"
            />
        </div>
    }
}

/// Inline error banner, hidden while `error` is `None`
#[component]
pub fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div
                role="alert"
                class="mb-6 p-4 bg-[var(--accent-error)]/10 border border-[var(--accent-error)]/50
                       rounded-[var(--radius-md)] text-[var(--accent-error)] text-sm animate-fade-in"
            >
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
