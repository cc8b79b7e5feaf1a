//! Chat data types and the backend wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query request sent to the chat backend
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// Completed (question, answer) pairs, oldest first
    pub chat_history: Vec<(String, String)>,
    pub question: String,
}

/// Query response
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}

/// Error response from API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// Message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }
}

/// Conversation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Question/answer pairs in order. A user message counts only when the
    /// next non-system message is an assistant reply.
    pub fn chat_history(&self) -> Vec<(String, String)> {
        let mut history = Vec::new();
        let mut pending: Option<&str> = None;

        for message in &self.messages {
            match message.role {
                MessageRole::User => pending = Some(&message.content),
                MessageRole::Assistant => {
                    if let Some(question) = pending.take() {
                        history.push((question.to_string(), message.content.clone()));
                    }
                }
                MessageRole::System => {}
            }
        }

        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn conversation(messages: Vec<Message>) -> Conversation {
        Conversation { messages }
    }

    #[test]
    fn test_chat_history_pairs_questions_with_answers() {
        let conv = conversation(vec![
            Message::user("What is recursion?"),
            Message::assistant("A function calling itself."),
            Message::user("Example?"),
            Message::assistant("factorial(n) = n * factorial(n - 1)"),
        ]);

        assert_eq!(
            conv.chat_history(),
            vec![
                ("What is recursion?".to_string(), "A function calling itself.".to_string()),
                ("Example?".to_string(), "factorial(n) = n * factorial(n - 1)".to_string()),
            ]
        );
    }

    #[test]
    fn test_chat_history_skips_unanswered_questions() {
        let conv = conversation(vec![
            Message::user("First"),
            Message::system("Error: Network error"),
            Message::user("Second"),
            Message::assistant("Answer to second"),
            Message::user("Still waiting"),
        ]);

        assert_eq!(
            conv.chat_history(),
            vec![("Second".to_string(), "Answer to second".to_string())]
        );
    }

    #[test]
    fn test_chat_history_ignores_orphan_answers() {
        let conv = conversation(vec![Message::assistant("Hello!")]);
        assert!(conv.chat_history().is_empty());
    }

    #[test]
    fn test_conversation_survives_json() {
        let mut conv = Conversation::default();
        conv.push(Message::user("hi"));
        conv.push(Message::assistant("hello"));

        let json = serde_json::to_string(&conv).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
        let restored: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, conv);
    }

    #[test]
    fn test_query_request_shape() {
        let req = QueryRequest {
            chat_history: vec![("q".into(), "a".into())],
            question: "next".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "chat_history": [["q", "a"]], "question": "next" })
        );
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(Message::user("a").id, Message::user("a").id);
    }
}
