//! Collaborator seams for the Colloquy IPC layer.
//!
//! The IPC layer implements none of its own persistence or orchestration; it
//! calls through the traits defined here. Concrete implementations live in
//! the storage and orchestration crates (or in [`mock`] for tests) and are
//! injected once at startup by the composition root.

pub mod errors;
pub mod mock;
pub mod orchestrator;
pub mod repository;
pub mod surface;
pub mod transaction;

pub use errors::{ConfigError, FieldError, StorageError};
pub use orchestrator::ChatOrchestrator;
pub use repository::{
    AgentRepository, ConversationAgentRepository, ConversationRepository, LlmConfigRepository,
    LlmModelCatalog, MessageRepository, PersonalityDefinitionsProvider, PersonalityRepository,
    RoleRepository, SettingsRepository,
};
pub use surface::{RendererSurface, SurfaceRegistry};
pub use transaction::{TransactionProvider, TransactionWork};
