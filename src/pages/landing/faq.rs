//! Frequently asked questions

use leptos::prelude::*;

/// (question, answer)
const FAQ_ITEMS: [(&str, &str); 4] = [
    (
        "How do I contact customer support if I have a question or issue?",
        "Email the course staff at support@ta-chatbot.edu or post on the course forum. \
         We usually reply within one working day.",
    ),
    (
        "Where do the answers come from?",
        "The assistant searches the course textbook for the passages most relevant to your \
         question and writes its answer from them.",
    ),
    (
        "Can I ask follow-up questions?",
        "Yes. Each question is sent together with the earlier questions and answers of the \
         current chat, so you can refer back to them.",
    ),
    (
        "Is my chat history saved?",
        "Your transcript is kept in your browser's local storage. Start a new chat to clear it.",
    ),
];

/// Accordion transition: opening a panel closes the other, clicking the open one collapses it.
pub fn next_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Accordion of common questions, one panel open at a time
#[component]
pub fn Faq() -> impl IntoView {
    let expanded = RwSignal::new(Option::<usize>::None);

    view! {
        <section id="faq" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12">"Frequently asked questions"</h2>

                <div class="space-y-3">
                    {FAQ_ITEMS.iter().enumerate().map(|(i, (question, answer))| {
                        let is_open = move || expanded.get() == Some(i);
                        view! {
                            <div class="faq-item rounded-xl border border-[var(--border-default)] bg-[var(--bg-elevated)]">
                                <button
                                    class="w-full flex items-center justify-between px-5 py-4 text-left font-medium"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| expanded.update(|e| *e = next_expanded(*e, i))
                                >
                                    <span>{*question}</span>
                                    <span class=move || format!(
                                        "transition-transform {}",
                                        if is_open() { "rotate-180" } else { "" }
                                    )>"▾"</span>
                                </button>
                                <Show when=is_open>
                                    <p class="px-5 pb-4 text-[var(--text-secondary)] animate-fade-in">{*answer}</p>
                                </Show>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_a_panel_from_collapsed() {
        assert_eq!(next_expanded(None, 2), Some(2));
    }

    #[test]
    fn test_opening_another_panel_closes_the_first() {
        assert_eq!(next_expanded(Some(0), 3), Some(3));
    }

    #[test]
    fn test_clicking_open_panel_collapses_it() {
        assert_eq!(next_expanded(Some(1), 1), None);
    }
}
