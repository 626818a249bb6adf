use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

const DEFAULT_SYSTEM_PROMPT: &str = "You are a warm, supportive stress companion. \
Listen carefully, validate feelings, and gently suggest small, concrete coping steps. \
Never diagnose or give medical advice.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionSettings {
    pub system_prompt: String,
    /// Whether replies should also be spoken aloud by the presentation layer.
    pub voice_enabled: bool,
}

impl Default for CompanionSettings {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            voice_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UserSettings {
    companion: CompanionSettings,
}

/// JSON-file backed settings. A missing or unreadable file falls back to
/// defaults rather than failing startup.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn companion(&self) -> CompanionSettings {
        self.data.read().unwrap().companion.clone()
    }

    pub fn update_companion(&self, settings: CompanionSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.companion = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: UserSettings = serde_json::from_str(&contents)?;
        let mut guard = self.data.write().unwrap();
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
