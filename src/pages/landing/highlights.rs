//! Feature highlights grid

use leptos::prelude::*;

/// (icon, title, description)
const HIGHLIGHTS: [(&str, &str, &str); 6] = [
    ("📚", "Grounded in the textbook", "Answers are retrieved from your course material, not the open web."),
    ("💬", "Follow-up friendly", "Every question is answered in the context of the conversation so far."),
    ("🕒", "Available around the clock", "Get help the night before the deadline, not just in office hours."),
    ("🧩", "Worked examples", "Ask for step-by-step solutions and practice problems on any topic."),
    ("🔒", "Private by default", "Your chat history stays in your browser until you clear it."),
    ("⚡", "Fast and lightweight", "A small WebAssembly app that loads quickly on any device."),
];

/// Grid of feature cards
#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section id="highlights" class="py-20 px-4 bg-[var(--bg-secondary)]">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-4">"Highlights"</h2>
                <p class="text-[var(--text-muted)] text-center mb-12 max-w-2xl mx-auto">
                    "Why students reach for the TA between lectures."
                </p>

                <div class="grid sm:grid-cols-2 md:grid-cols-3 gap-8">
                    {HIGHLIGHTS.iter().map(|(icon, title, description)| view! {
                        <HighlightCard icon=*icon title=*title description=*description />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-6 bg-[var(--bg-elevated)] rounded-xl border border-[var(--border-default)] transition-colors">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-[var(--text-secondary)]">{description}</p>
        </div>
    }
}
