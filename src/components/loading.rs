//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-[var(--accent-primary)] rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-[var(--accent-primary)] rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-[var(--accent-primary)] rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Shown in the transcript while the assistant is answering
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 message-appear">
            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-violet-500 to-purple-600 flex items-center justify-center text-white text-sm font-medium shrink-0">
                "🎓"
            </div>
            <div class="px-4 py-3 bg-[var(--bg-elevated)] rounded-2xl rounded-tl-sm">
                <LoadingDots />
            </div>
        </div>
    }
}
