//! LLM provider configurations and model listings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::now_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    OpenAi,
    Anthropic,
    Google,
    Ollama,
}

/// A stored LLM configuration. API keys are held by the secure-storage
/// collaborator and never appear on this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmConfig {
    pub id: String,
    pub name: String,
    pub provider: LlmProvider,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl LlmConfig {
    pub fn from_input(input: LlmConfigInput) -> Self {
        let now = now_ms();
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            provider: input.provider,
            model: input.model,
            base_url: input.base_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for creating a configuration. Carries the API key exactly once, on
/// the way into secure storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmConfigInput {
    pub name: String,
    pub provider: LlmProvider,
    pub model: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmConfigPatch {
    pub name: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// A model advertised by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmModel {
    pub id: String,
    pub name: String,
    pub provider: LlmProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u32>,
}
