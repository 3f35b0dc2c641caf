//! Domain value types for the Colloquy main process.
//!
//! Everything here is a plain serde-serializable value object. Repositories
//! hand these out and the IPC layer forwards them to the renderer unchanged;
//! no type in this crate owns I/O or mutable shared state.

pub mod agents;
pub mod chat;
pub mod conversation;
pub mod llm;
pub mod message;
pub mod personalities;
pub mod roles;
pub mod settings;
pub mod time;

pub use agents::{Agent, AgentLibrary};
pub use chat::ProcessingResult;
pub use conversation::{
    AddConversationAgentInput, Conversation, ConversationAgent, CreateConversationInput,
    UpdateConversationAgentInput, UpdateConversationInput,
};
pub use llm::{LlmConfig, LlmConfigInput, LlmConfigPatch, LlmModel, LlmProvider};
pub use message::{CreateMessageInput, Message, MessageRole};
pub use personalities::{BigFive, Personality, PersonalityLibrary};
pub use roles::{Role, RoleLibrary};
pub use settings::{
    AdvancedSettings, AppSettings, AppearanceSettings, GeneralSettings, SettingsPatch, Theme,
};
