//! Chat page - main conversation interface

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::ask;
use crate::components::{ChatInput, ChatMessage, Header, TypingIndicator};
use crate::routes::AppRoute;
use crate::state::AppState;
use crate::theme::ThemeProvider;
use crate::types::Message;

/// Example prompts offered while the transcript is empty
const EXAMPLE_PROMPTS: [(&str, &str); 4] = [
    ("📖", "Summarize the key ideas of chapter 3"),
    ("🧮", "Walk me through a worked example of Big-O analysis"),
    ("❓", "What is the difference between a stack and a queue?"),
    ("📝", "Give me three practice questions on recursion"),
];

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Local state
    let input = RwSignal::new(String::new());
    let is_sending = RwSignal::new(false);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        scroll_into_view(messages_end_ref);
    };

    let state_for_send = state.clone();
    let do_send_message = move |question: String| {
        let question = question.trim().to_string();
        if question.is_empty() || is_sending.get_untracked() {
            return;
        }

        let state = state_for_send.clone();
        let history = state.conversation.with_untracked(|c| c.chat_history());
        state.conversation.update(|c| c.push(Message::user(&question)));
        is_sending.set(true);
        scroll_to_bottom();

        spawn_local(async move {
            match ask(&state.config, history, &question).await {
                Ok(answer) => {
                    state.conversation.update(|c| c.push(Message::assistant(answer)));
                }
                Err(e) => {
                    tracing::error!("Query failed: {}", e);
                    state
                        .conversation
                        .update(|c| c.push(Message::system(format!("Error: {}", e))));
                }
            }

            is_sending.set(false);
            scroll_to_bottom();
        });
    };

    let do_send_for_input = do_send_message.clone();
    let send_message = move || {
        let question = input.get_untracked();
        input.set(String::new());
        do_send_for_input(question);
    };

    let state_for_new_chat = state.clone();
    let new_chat = move |_| {
        state_for_new_chat.new_chat();
        input.set(String::new());
        tracing::debug!("started new chat");
    };

    view! {
        <Title text=AppRoute::Chat.title() />
        <ThemeProvider mode=state.theme>
            <div class="h-screen flex flex-col">
                <Header />

                <main class="flex-1 flex flex-col min-w-0 max-w-4xl w-full mx-auto">
                    // Chat header
                    <div class="h-14 px-4 flex items-center justify-between border-b border-[var(--border-default)]">
                        <div class="flex items-center gap-2">
                            <div class=move || format!(
                                "w-2 h-2 rounded-full {}",
                                if is_sending.get() { "bg-[var(--accent-primary)] animate-pulse" } else { "bg-[var(--accent-success)]" }
                            )></div>
                            <span class="text-xs text-[var(--text-muted)]">
                                {move || if is_sending.get() { "Thinking..." } else { "Ready" }}
                            </span>
                        </div>

                        <button
                            on:click=new_chat
                            disabled=move || is_sending.get()
                            class="btn btn-ghost text-sm"
                        >
                            "New chat"
                        </button>
                    </div>

                    // Messages area
                    <div class="flex-1 overflow-y-auto px-4 py-6 space-y-6">
                        {
                            let state = state.clone();
                            let do_send = do_send_message.clone();
                            move || {
                                if state.conversation.with(|c| c.is_empty()) {
                                    let do_send = do_send.clone();
                                    view! { <EmptyState on_prompt=do_send /> }.into_any()
                                } else {
                                    view! {}.into_any()
                                }
                            }
                        }

                        {
                            let state = state.clone();
                            move || {
                                let messages = state.conversation.get().messages;
                                messages.into_iter().map(|msg| view! {
                                    <ChatMessage message=msg />
                                }).collect::<Vec<_>>()
                            }
                        }

                        <Show when=move || is_sending.get()>
                            <TypingIndicator />
                        </Show>

                        // Scroll anchor
                        <div node_ref=messages_end_ref></div>
                    </div>

                    <ChatInput
                        value=input
                        on_submit=send_message
                        disabled=Signal::derive(move || is_sending.get())
                        placeholder="Ask a question... (Shift+Enter for new line)"
                    />
                </main>
            </div>
        </ThemeProvider>
    }
}

/// Smoothly scroll the anchor into view. The answer future can outlive the
/// page, so a disposed anchor is skipped instead of read. Returns whether it scrolled.
fn scroll_into_view(anchor: NodeRef<leptos::html::Div>) -> bool {
    match anchor.try_get_untracked().flatten() {
        Some(el) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Empty state when no messages
#[component]
fn EmptyState<F>(on_prompt: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let state = expect_context::<AppState>();

    view! {
        <div class="empty-state h-full">
            <div class="empty-state-icon text-5xl">"🎓"</div>
            <h2 class="empty-state-title text-gradient">"How can I help you study today?"</h2>
            <p class="empty-state-description">
                {format!("Ask {} anything about the course material.", state.config.app_name)}
            </p>

            <div class="quick-prompts w-full max-w-2xl grid sm:grid-cols-2 gap-3">
                {EXAMPLE_PROMPTS.iter().enumerate().map(|(i, (emoji, prompt))| {
                    let prompt = *prompt;
                    let on_prompt = on_prompt.clone();
                    view! {
                        <button
                            on:click=move |_| on_prompt(prompt.to_string())
                            class=format!("quick-prompt text-left animate-fade-in-up stagger-{}", (i % 5) + 1)
                        >
                            <span class="text-2xl mr-3">{*emoji}</span>
                            <span>{prompt}</span>
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_after_page_disposed_is_skipped() {
        let owner = Owner::new();
        let (is_sending, anchor) = owner.with(|| {
            (RwSignal::new(true), NodeRef::<leptos::html::Div>::new())
        });
        owner.cleanup();
        drop(owner);

        // Both run when a reply lands after navigating away from the chat page
        is_sending.set(false);
        assert!(!scroll_into_view(anchor));
    }

    #[test]
    fn test_scroll_without_mounted_anchor_is_skipped() {
        let owner = Owner::new();
        let anchor = owner.with(NodeRef::<leptos::html::Div>::new);
        assert!(!scroll_into_view(anchor));
    }
}
