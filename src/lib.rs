//! Serenity: a mental-wellness companion. Guided 4-4-4 breathing, a chat
//! companion backed by a generative-language endpoint, the quick-relief
//! toolkit content, the analytics sample dataset, and route gating.

pub mod analytics;
pub mod breathing;
pub mod companion;
pub mod gate;
pub mod relief;
pub mod settings;

pub use breathing::{BreathPhase, BreathingController, BreathingEvent, BreathingState};
pub use companion::{CompanionClient, Conversation};
pub use settings::{CompanionSettings, SettingsStore};
