//! Hero section

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::AppState;
use crate::validation::validate_email;

/// Headline with an email call to action that leads into sign-up
#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get()) {
            Ok(()) => {
                error.set(None);
                tracing::info!("hero call to action accepted");
                navigate(AppRoute::SignUp.path(), Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <section id="hero" class="hero px-4 pt-28 pb-16">
            <div class="max-w-4xl mx-auto text-center">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-slide-up">
                    "Your course's "
                    <span class="gradient-text">"teaching assistant"</span>
                </h1>

                <p class="text-lg md:text-xl text-[var(--text-secondary)] mb-10 max-w-2xl mx-auto animate-slide-up" style="animation-delay: 0.1s">
                    {format!(
                        "{} answers questions straight from the textbook, any time of day. \
                         Ask follow-ups, get worked examples, and study at your own pace.",
                        state.config.app_name
                    )}
                </p>

                <form
                    on:submit=on_submit
                    novalidate=true
                    class="flex flex-col sm:flex-row gap-3 justify-center max-w-lg mx-auto animate-slide-up"
                    style="animation-delay: 0.2s"
                >
                    <input
                        type="email"
                        aria-label="Enter your email address"
                        placeholder="Your email address"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        class="input flex-1"
                    />
                    <button type="submit" class="btn btn-primary px-6">"Start now"</button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p role="alert" class="mt-3 text-sm text-[var(--accent-error)]">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>

                <p class="mt-4 text-xs text-[var(--text-muted)]">
                    "By clicking \"Start now\" you agree to our Terms & Conditions."
                </p>
            </div>
        </section>
    }
}
