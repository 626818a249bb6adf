use std::env;

use anyhow::{bail, Context, Result};
use log::warn;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::history::{ChatMessage, ChatRole};

const API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-2.0-flash:generateContent";
const API_KEY_ENV: &str = "SERENITY_GEMINI_API_KEY";

/// Reply used when the upstream response has no usable text.
pub const EMPTY_RESPONSE_REPLY: &str = "I'm here to listen. How can I help?";

/// Supportive replies used when no API key is configured and the companion
/// runs in offline mode.
const FALLBACK_REPLIES: &[&str] = &[
    "I understand how you're feeling. Would you like to talk more about what's causing your stress?",
    "That sounds challenging. Remember that it's okay to feel this way, and I'm here to support you.",
    "I hear you. Taking small steps to address what's bothering you can make a big difference. What's one small thing you could do today to help yourself?",
    "Thank you for sharing that with me. Would it help to explore some coping strategies together?",
    "Your feelings are valid. Let's work through this together at your own pace.",
];

#[derive(Clone, Debug)]
pub struct CompanionConfig {
    pub api_url: String,
    pub api_key: String,
}

impl CompanionConfig {
    /// Read the API key from the environment. Returns `None` when the key is
    /// absent or blank, which puts the companion in offline mode.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var(API_KEY_ENV).ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(Self {
            api_url: API_URL.into(),
            api_key,
        })
    }
}

/// Client for the generative-language endpoint behind the companion chat.
/// The backend itself is opaque: this shapes requests, extracts reply text,
/// and degrades to canned supportive replies when unconfigured.
#[derive(Clone)]
pub struct CompanionClient {
    client: Client,
    config: Option<CompanionConfig>,
}

impl CompanionClient {
    pub fn from_env() -> Self {
        Self::new(CompanionConfig::from_env())
    }

    pub fn new(config: Option<CompanionConfig>) -> Self {
        if config.is_none() {
            warn!("no {API_KEY_ENV} configured; companion replies are canned");
        }
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn online(&self) -> bool {
        self.config.is_some()
    }

    /// Produce a companion reply for the conversation so far. `history` must
    /// contain at least one message and is sent in full each turn.
    pub async fn generate(
        &self,
        history: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> Result<String> {
        if history.is_empty() {
            bail!("no messages provided");
        }

        let Some(config) = self.config.as_ref() else {
            return Ok(supportive_fallback().to_string());
        };

        let payload = build_request(history, system_prompt);

        let response = self
            .client
            .post(&config.api_url)
            .query(&[("key", config.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .context("companion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("companion endpoint returned {status}: {body}");
        }

        let body: GenerateResponse = response
            .json()
            .await
            .context("companion response was not valid JSON")?;

        Ok(extract_reply_text(body))
    }
}

/// Pick one of the canned supportive replies at random.
pub fn supportive_fallback() -> &'static str {
    FALLBACK_REPLIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(EMPTY_RESPONSE_REPLY)
}

/// Shape the wire payload: the optional system prompt is folded into the
/// first message's text rather than sent as a separate field, and fixed
/// generation settings keep replies warm but bounded.
fn build_request(history: &[ChatMessage], system_prompt: Option<&str>) -> GenerateRequest {
    let contents = history
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let text = match (index, system_prompt) {
                (0, Some(prompt)) => format!("{prompt}\n\n{}", message.text),
                _ => message.text.clone(),
            };
            Content {
                role: match message.role {
                    ChatRole::User => "user",
                    ChatRole::Model => "model",
                },
                parts: vec![Part { text }],
            }
        })
        .collect();

    GenerateRequest {
        contents,
        generation_config: GenerationConfig::default(),
    }
}

fn extract_reply_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .flatten()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| EMPTY_RESPONSE_REPLY.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}
