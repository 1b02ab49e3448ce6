//! Configuration management for chatcast.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::channel::Channel;
use crate::dispatch::{Dispatch, Scenario};
use crate::error::{ChatcastError, Result};
use crate::message::{Message, MessageKind};
use crate::timestamp::parse_timestamp;

/// Top-level chatcast configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatcastConfig {
    /// Demonstration settings.
    #[serde(default)]
    pub demo: DemoSettings,

    /// Custom dispatches. Replaces the built-in sample when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenario: Vec<ScenarioEntry>,
}

/// Demo-specific settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Fixed send time for every message (None = current time).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
}

/// One configured dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
    pub channel: Channel,
    #[serde(default)]
    pub kind: MessageKind,
}

impl ScenarioEntry {
    fn to_dispatch(&self, fallback: NaiveDateTime) -> Result<Dispatch> {
        let sent_at = match &self.sent_at {
            Some(raw) => parse_timestamp(raw)?,
            None => fallback,
        };
        Ok(Dispatch {
            channel: self.channel.clone(),
            message: Message::new(&self.content, self.kind.clone(), sent_at),
        })
    }
}

impl ChatcastConfig {
    /// Load config from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChatcastError::Config(format!("Failed to read config: {}", e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ChatcastError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChatcastError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatcast")
            .join("config.toml")
    }

    /// Parsed `[demo].sent_at`, if set.
    pub fn demo_sent_at(&self) -> Result<Option<NaiveDateTime>> {
        self.demo.sent_at.as_deref().map(parse_timestamp).transpose()
    }

    /// Send time for messages that do not carry their own: `[demo].sent_at`, else `now`.
    pub fn effective_sent_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        Ok(self.demo_sent_at()?.unwrap_or(now))
    }

    /// Build the configured scenario, or `None` when the config defines none.
    ///
    /// Entries without their own `sent_at` are stamped with `default_sent_at`.
    pub fn resolve_scenario(&self, default_sent_at: NaiveDateTime) -> Result<Option<Scenario>> {
        if self.scenario.is_empty() {
            return Ok(None);
        }
        let scenario = self
            .scenario
            .iter()
            .map(|entry| entry.to_dispatch(default_sent_at))
            .collect::<Result<Scenario>>()?;
        Ok(Some(scenario))
    }
}
