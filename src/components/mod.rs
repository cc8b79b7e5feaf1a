//! Reusable UI components

pub mod auth_card;
pub mod chat_input;
pub mod chat_message;
pub mod header;
pub mod loading;
pub mod theme_toggle;

pub use auth_card::{AuthLayout, FormError, FormField};
pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use header::Header;
pub use loading::{LoadingDots, TypingIndicator};
pub use theme_toggle::ThemeToggle;
