use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Greeting shown before the user has said anything.
pub const OPENING_GREETING: &str = "Hello, I'm your stress companion. How are you feeling today? \
I'm here to listen and help you navigate your emotions.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A running companion conversation. The full history is kept in order and
/// resent to the language model on every turn, so replies stay grounded in
/// everything said so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// New conversation seeded with the companion's opening greeting.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            messages: vec![ChatMessage::model(OPENING_GREETING)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::model(text));
    }

    /// Messages to send upstream. The seeded greeting is local flavor, not
    /// part of the exchange, so history starts at the first user message.
    pub fn outbound_history(&self) -> &[ChatMessage] {
        let first_user = self
            .messages
            .iter()
            .position(|m| m.role == ChatRole::User)
            .unwrap_or(self.messages.len());
        &self.messages[first_user..]
    }

    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Model)
            .map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_conversation_opens_with_greeting() {
        let convo = Conversation::new();
        assert_eq!(convo.messages.len(), 1);
        assert_eq!(convo.messages[0].role, ChatRole::Model);
        assert_eq!(convo.messages[0].text, OPENING_GREETING);
    }

    #[test]
    fn history_accumulates_in_order() {
        let mut convo = Conversation::new();
        convo.push_user("I feel overwhelmed");
        convo.push_model("That sounds hard.");
        convo.push_user("It is");

        let roles: Vec<ChatRole> = convo.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::Model, ChatRole::User, ChatRole::Model, ChatRole::User]
        );
    }

    #[test]
    fn outbound_history_skips_seeded_greeting() {
        let mut convo = Conversation::new();
        convo.push_user("hi");
        convo.push_model("hello");

        let outbound = convo.outbound_history();
        assert_eq!(outbound.len(), 2);
        assert_eq!(outbound[0].role, ChatRole::User);
    }

    #[test]
    fn outbound_history_is_empty_before_first_user_message() {
        let convo = Conversation::new();
        assert!(convo.outbound_history().is_empty());
    }

    #[test]
    fn last_reply_finds_newest_model_message() {
        let mut convo = Conversation::new();
        convo.push_user("hi");
        convo.push_model("first");
        convo.push_user("again");
        convo.push_model("second");
        assert_eq!(convo.last_reply(), Some("second"));
    }
}
