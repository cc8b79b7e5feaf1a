//! Partner logo strip

use leptos::prelude::*;

use crate::theme::{use_theme_mode, ThemeMode};

const PARTNERS: [&str; 6] = [
    "Northbridge University",
    "Lakeside College",
    "Open Courseware",
    "Institute of Computing",
    "Riverside Academy",
    "Summit Polytechnic",
];

#[component]
pub fn LogoCollection() -> impl IntoView {
    let mode = use_theme_mode();

    view! {
        <section id="logo-collection" class="py-8 px-4">
            <p class="text-center text-sm text-[var(--text-muted)] mb-6">
                "Trusted by students at"
            </p>
            <div class=move || format!(
                "max-w-5xl mx-auto flex flex-wrap justify-center gap-x-10 gap-y-4 {}",
                match mode.get() {
                    ThemeMode::Dark => "opacity-60",
                    ThemeMode::Light => "opacity-80 grayscale",
                }
            )>
                {PARTNERS.iter().map(|name| view! {
                    <span class="logo-wordmark font-semibold tracking-wide text-[var(--text-secondary)]">
                        {*name}
                    </span>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
