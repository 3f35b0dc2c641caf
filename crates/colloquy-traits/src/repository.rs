//! Repository traits, one per domain.
//!
//! All methods return `anyhow::Result` so implementations can surface the
//! typed errors in [`crate::errors`] through the chain; the IPC classifier
//! downcasts them back out at the boundary.

use anyhow::Result;
use async_trait::async_trait;
use colloquy_models::{
    AddConversationAgentInput, Agent, AgentLibrary, AppSettings, Conversation, ConversationAgent,
    CreateConversationInput, CreateMessageInput, LlmConfig, LlmConfigInput, LlmConfigPatch,
    LlmModel, Message, Personality, PersonalityLibrary, Role, RoleLibrary, SettingsPatch,
    UpdateConversationAgentInput, UpdateConversationInput,
};
use serde_json::Value;

/// Application settings persistence. `save` merges the patch over defaults
/// and persists the result; saving an empty patch therefore restores
/// defaults, which is what the IPC reset handler relies on.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> Result<AppSettings>;
    async fn save(&self, patch: SettingsPatch) -> Result<()>;
    async fn set_debug_logging(&self, enabled: bool) -> Result<()>;
}

/// Role library persistence. `load` yields `None` before first save.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn load(&self) -> Result<Option<RoleLibrary>>;
    async fn save(&self, roles: Vec<Role>) -> Result<()>;
    async fn reset(&self) -> Result<()>;
}

#[async_trait]
pub trait PersonalityRepository: Send + Sync {
    async fn load(&self) -> Result<Option<PersonalityLibrary>>;
    async fn save(&self, personalities: Vec<Personality>) -> Result<()>;
    async fn reset(&self) -> Result<()>;
}

#[async_trait]
pub trait AgentRepository: Send + Sync {
    async fn load(&self) -> Result<Option<AgentLibrary>>;
    async fn save(&self, agents: Vec<Agent>) -> Result<()>;
    async fn reset(&self) -> Result<()>;
}

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create(&self, input: CreateConversationInput) -> Result<Conversation>;
    async fn list(&self) -> Result<Vec<Conversation>>;
    async fn get(&self, id: &str) -> Result<Option<Conversation>>;
    async fn update(&self, id: &str, updates: UpdateConversationInput) -> Result<Conversation>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait ConversationAgentRepository: Send + Sync {
    async fn get_by_conversation(&self, conversation_id: &str) -> Result<Vec<ConversationAgent>>;
    async fn add(&self, input: AddConversationAgentInput) -> Result<ConversationAgent>;
    async fn update(
        &self,
        conversation_id: &str,
        agent_id: &str,
        updates: UpdateConversationAgentInput,
    ) -> Result<ConversationAgent>;
    /// Delete one membership row. Callers needing the cascading removal (row
    /// plus the agent's messages) go through the IPC remove handler, which
    /// wraps this and the message delete in one transaction.
    async fn remove(&self, conversation_id: &str, agent_id: &str) -> Result<()>;
    async fn list(&self) -> Result<Vec<ConversationAgent>>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn list(&self, conversation_id: &str) -> Result<Vec<Message>>;
    async fn create(&self, input: CreateMessageInput) -> Result<Message>;
    async fn update_inclusion(&self, message_id: &str, included: bool) -> Result<Message>;
    /// Delete every message the agent authored in the conversation, returning
    /// the number removed. Used as the child step of the cascading
    /// conversation-agent removal.
    async fn delete_for_conversation_agent(
        &self,
        conversation_id: &str,
        agent_id: &str,
    ) -> Result<u64>;
}

#[async_trait]
pub trait LlmConfigRepository: Send + Sync {
    async fn create(&self, input: LlmConfigInput) -> Result<LlmConfig>;
    async fn read(&self, id: &str) -> Result<Option<LlmConfig>>;
    async fn update(&self, id: &str, updates: LlmConfigPatch) -> Result<LlmConfig>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn list(&self) -> Result<Vec<LlmConfig>>;
    /// One-time startup migration of stored configurations.
    async fn initialize(&self) -> Result<()>;
    /// Drop any in-memory read cache so the next read hits storage.
    async fn refresh_cache(&self) -> Result<()>;
}

/// Provider model listings, aggregated across configured providers.
#[async_trait]
pub trait LlmModelCatalog: Send + Sync {
    async fn load(&self) -> Result<Vec<LlmModel>>;
}

/// Loader for the bundled personality trait definitions document.
#[async_trait]
pub trait PersonalityDefinitionsProvider: Send + Sync {
    async fn get_definitions(&self) -> Result<Value>;
}
