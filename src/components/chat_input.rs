//! Chat input component

use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

const MAX_HEIGHT_PX: i32 = 200;

/// Chat input with auto-resize textarea
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether input is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Ask a question about the course...")]
    placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let _ = el.set_attribute("style", "height: auto;");
            let new_height = el.scroll_height().min(MAX_HEIGHT_PX);
            let _ = el.set_attribute(
                "style",
                &format!("height: {}px; max-height: {}px;", new_height, MAX_HEIGHT_PX),
            );
        }
    };

    let can_submit = move || !disabled.get() && !value.get().trim().is_empty();

    let on_input = move |ev: web_sys::Event| {
        value.set(event_target_value(&ev));
        resize_textarea();
    };

    // Enter submits, Shift+Enter inserts a newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if can_submit() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = move |_| {
        if can_submit() {
            on_submit();
        }
    };

    view! {
        <div class="flex items-end gap-3 p-4 bg-[var(--bg-secondary)] backdrop-blur-sm border-t border-[var(--border-default)]">
            <div class="flex-1 relative">
                <textarea
                    node_ref=textarea_ref
                    prop:value=move || value.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="input w-full px-4 py-3 rounded-xl resize-none
                           focus:outline-none focus:ring-2 focus:ring-[var(--accent-primary)]
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 200px;"
                ></textarea>
            </div>

            <button
                on:click=on_button_click
                disabled=move || !can_submit()
                class="btn btn-primary p-3 rounded-xl disabled:cursor-not-allowed"
                aria-label="Send"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="w-5 h-5"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}
