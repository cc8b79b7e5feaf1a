//! Global application state

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::AppConfig;
use crate::error::Result;
use crate::theme::ThemeMode;
use crate::types::Conversation;

const STORAGE_KEY_THEME: &str = "ta_chatbot_theme";
const STORAGE_KEY_CONVERSATION: &str = "ta_chatbot_conversation";

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Static configuration
    pub config: AppConfig,
    /// Selected theme mode
    pub theme: RwSignal<ThemeMode>,
    /// Current chat transcript
    pub conversation: RwSignal<Conversation>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let theme = load_or_default::<ThemeMode>(STORAGE_KEY_THEME);
        let conversation = load_or_default::<Conversation>(STORAGE_KEY_CONVERSATION);
        tracing::debug!(%theme, messages = conversation.messages.len(), "restored state");

        Self {
            config,
            theme: RwSignal::new(theme),
            conversation: RwSignal::new(conversation),
        }
    }

    /// Write theme and transcript back to local storage whenever they change.
    pub fn persist(&self) {
        let theme = self.theme;
        Effect::new(move |_| {
            let mode = theme.get();
            if let Err(e) = save(STORAGE_KEY_THEME, &mode) {
                tracing::warn!("Failed to save theme: {}", e);
            }
        });

        let conversation = self.conversation;
        Effect::new(move |_| {
            conversation.with(|c| {
                if let Err(e) = save(STORAGE_KEY_CONVERSATION, c) {
                    tracing::warn!("Failed to save conversation: {}", e);
                }
            });
        });
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|mode| *mode = mode.toggle());
    }

    pub fn new_chat(&self) {
        self.conversation.update(Conversation::clear);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::from_env())
    }
}

fn load_or_default<T: DeserializeOwned + Default>(key: &str) -> T {
    match LocalStorage::get::<T>(key) {
        Ok(value) => value,
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => T::default(),
        Err(e) => {
            tracing::warn!(key, "Ignoring unreadable stored value: {}", e);
            T::default()
        }
    }
}

fn save<T: Serialize>(key: &str, value: &T) -> Result<()> {
    LocalStorage::set(key, value)?;
    Ok(())
}
