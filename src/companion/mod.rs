pub mod client;
pub mod history;

pub use client::{supportive_fallback, CompanionClient, CompanionConfig, EMPTY_RESPONSE_REPLY};
pub use history::{ChatMessage, ChatRole, Conversation, OPENING_GREETING};
