//! Application settings.

use anyhow::Result;
use serde::{Deserialize, Serialize};

// Default configuration constants
const DEFAULT_RESPONSE_DELAY_MS: u64 = 2_000;
const DEFAULT_MAXIMUM_MESSAGES: u32 = 50;
const DEFAULT_MAXIMUM_WAIT_TIME_MS: u64 = 30_000;
const DEFAULT_FONT_SIZE: u8 = 14;
const MIN_MAXIMUM_MESSAGES: u32 = 1;
const MIN_WAIT_TIME_MS: u64 = 1_000;

/// Renderer theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// General chat behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettings {
    /// Delay between consecutive agent responses.
    pub response_delay_ms: u64,
    /// Maximum messages kept in an agent's context window.
    pub maximum_messages: u32,
    /// Upper bound on how long a chat round may wait for an agent.
    pub maximum_wait_time_ms: u64,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            maximum_messages: DEFAULT_MAXIMUM_MESSAGES,
            maximum_wait_time_ms: DEFAULT_MAXIMUM_WAIT_TIME_MS,
        }
    }
}

/// Appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub show_timestamps: bool,
    pub font_size: u8,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            show_timestamps: true,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Advanced settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedSettings {
    pub debug_logging: bool,
    pub experimental_features: bool,
}

/// Full application settings, grouped by section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub appearance: AppearanceSettings,
    pub advanced: AdvancedSettings,
}

impl AppSettings {
    /// Validate setting values.
    pub fn validate(&self) -> Result<()> {
        if self.general.maximum_messages < MIN_MAXIMUM_MESSAGES {
            return Err(anyhow::anyhow!(
                "Maximum messages must be at least {}",
                MIN_MAXIMUM_MESSAGES
            ));
        }

        if self.general.maximum_wait_time_ms < MIN_WAIT_TIME_MS {
            return Err(anyhow::anyhow!(
                "Maximum wait time must be at least {} ms",
                MIN_WAIT_TIME_MS
            ));
        }

        Ok(())
    }

    /// Apply a partial update section-by-section. Sections absent from the
    /// patch keep their current values.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(general) = patch.general {
            self.general = general;
        }
        if let Some(appearance) = patch.appearance {
            self.appearance = appearance;
        }
        if let Some(advanced) = patch.advanced {
            self.advanced = advanced;
        }
    }
}

/// Partial settings update. Saving merges the patch over defaults, so an
/// empty patch restores defaults; that is what the reset path persists
/// before reloading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub general: Option<GeneralSettings>,
    pub appearance: Option<AppearanceSettings>,
    pub advanced: Option<AdvancedSettings>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.general.is_none() && self.appearance.is_none() && self.advanced.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AppSettings::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_messages() {
        let mut settings = AppSettings::default();
        settings.general.maximum_messages = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn apply_merges_only_present_sections() {
        let mut settings = AppSettings::default();
        let patch = SettingsPatch {
            advanced: Some(AdvancedSettings {
                debug_logging: true,
                experimental_features: false,
            }),
            ..Default::default()
        };
        settings.apply(patch);
        assert!(settings.advanced.debug_logging);
        assert_eq!(settings.general, GeneralSettings::default());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert!(json["general"]["responseDelayMs"].is_u64());
        assert!(json["appearance"]["showTimestamps"].is_boolean());
    }
}
