//! Chat message component

use leptos::prelude::*;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::types::{Message, MessageRole};

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let is_system = message.role == MessageRole::System;

    let bubble = if is_user {
        "bg-[var(--accent-primary)] text-white rounded-tr-sm"
    } else if is_system {
        "bg-[var(--accent-error)]/10 border border-[var(--accent-error)]/50 text-[var(--accent-error)] rounded-tl-sm"
    } else {
        "bg-[var(--bg-elevated)] text-[var(--text-primary)] rounded-tl-sm"
    };

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            // Avatar
            <div class=format!(
                "w-8 h-8 rounded-full flex items-center justify-center text-white text-sm font-medium shrink-0 {}",
                if is_user {
                    "bg-gradient-to-br from-blue-500 to-cyan-500"
                } else {
                    "bg-gradient-to-br from-violet-500 to-purple-600"
                }
            )>
                {match message.role {
                    MessageRole::User => "👤",
                    MessageRole::Assistant => "🎓",
                    MessageRole::System => "⚠️",
                }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=format!("px-4 py-3 rounded-2xl {}", bubble)>
                    {if message.role == MessageRole::Assistant {
                        view! {
                            <div class="markdown break-words" inner_html=render_markdown(&message.content)></div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="whitespace-pre-wrap break-words">{message.content.clone()}</div>
                        }.into_any()
                    }}
                </div>

                <span class="text-xs text-[var(--text-muted)] mt-1">
                    {message.timestamp.format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
}

/// URL schemes a rendered link or image may point at. Relative URLs are also allowed.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render Markdown to HTML. Raw HTML in the source is escaped, not passed through,
/// and link or image targets with any other scheme are replaced by `#`.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Browsers drop ASCII whitespace and control characters inside a URL, so they
/// are removed before the scheme is read.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    match cleaned.find([':', '/', '?', '#']) {
        Some(pos) if cleaned[pos..].starts_with(':') => {
            let scheme = cleaned[..pos].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_code_blocks() {
        let html = render_markdown("Try this:\n\n```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_markdown_escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_markdown_escapes_inline_html() {
        let html = render_markdown("hello <img src=x onerror=alert(1)> world");
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_markdown_inline_formatting() {
        let html = render_markdown("**Big-O** of `sort` is *n log n*");
        assert!(html.contains("<strong>Big-O</strong>"));
        assert!(html.contains("<code>sort</code>"));
        assert!(html.contains("<em>n log n</em>"));
    }

    #[test]
    fn test_markdown_neutralizes_script_links() {
        for source in [
            "[click](javascript:alert(document.cookie))",
            "<javascript:alert(document.cookie)>",
            "[click](JaVaScRiPt:alert(1))",
            "![img](data:text/html;base64,PHNjcmlwdD4=)",
        ] {
            let html = render_markdown(source);
            let lowered = html.to_ascii_lowercase();
            assert!(!lowered.contains("href=\"javascript:"), "{} rendered as {}", source, html);
            assert!(!lowered.contains("src=\"data:"), "{} rendered as {}", source, html);
        }
        assert!(render_markdown("[click](javascript:alert(1))").contains("href=\"#\""));
    }

    #[test]
    fn test_markdown_keeps_safe_links() {
        let html = render_markdown("[docs](https://example.edu/ch3) and [ta](mailto:ta@example.edu) and [next](/chat)");
        assert!(html.contains("href=\"https://example.edu/ch3\""));
        assert!(html.contains("href=\"mailto:ta@example.edu\""));
        assert!(html.contains("href=\"/chat\""));
    }

    #[test]
    fn test_url_scheme_check() {
        assert!(is_safe_url("http://example.com"));
        assert!(is_safe_url("section-2#intro"));
        assert!(is_safe_url("./notes?page=a:b"));
        assert!(!is_safe_url(" javascript:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
    }
}
