//! Composition root.
//!
//! All collaborators are injected through [`IpcDeps`] and wired into a fresh
//! router by [`build_router`]; there are no globals and no separate
//! initialization phase, so a built router is always fully usable.

use colloquy_traits::{
    AgentRepository, ChatOrchestrator, ConversationAgentRepository, ConversationRepository,
    LlmConfigRepository, LlmModelCatalog, MessageRepository, PersonalityDefinitionsProvider,
    PersonalityRepository, RoleRepository, SettingsRepository, SurfaceRegistry,
    TransactionProvider,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers;
use crate::mode::RuntimeMode;
use crate::router::IpcRouter;

/// Everything the IPC layer needs, injected once at startup.
pub struct IpcDeps {
    pub mode: RuntimeMode,
    pub settings: Arc<dyn SettingsRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub personalities: Arc<dyn PersonalityRepository>,
    pub agents: Arc<dyn AgentRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub conversation_agents: Arc<dyn ConversationAgentRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub llm_configs: Arc<dyn LlmConfigRepository>,
    pub llm_models: Arc<dyn LlmModelCatalog>,
    pub personality_definitions: Arc<dyn PersonalityDefinitionsProvider>,
    pub transactions: Arc<dyn TransactionProvider>,
    pub orchestrator: Arc<dyn ChatOrchestrator>,
    pub surfaces: Arc<dyn SurfaceRegistry>,
}

/// Build a router with every domain registered.
pub fn build_router(deps: &IpcDeps) -> IpcRouter {
    let mut router = IpcRouter::new(deps.mode);
    register_all(&mut router, deps);
    info!(channels = router.channels().len(), "ipc handlers registered");
    router
}

pub fn register_all(router: &mut IpcRouter, deps: &IpcDeps) {
    handlers::settings::register(router, deps.settings.clone());
    handlers::roles::register(router, deps.roles.clone());
    handlers::personalities::register(router, deps.personalities.clone());
    handlers::agents::register(router, deps.agents.clone());
    handlers::conversations::register(router, deps.conversations.clone());
    handlers::conversation_agents::register(
        router,
        deps.conversation_agents.clone(),
        deps.messages.clone(),
        deps.transactions.clone(),
    );
    handlers::messages::register(router, deps.messages.clone());
    handlers::llm_config::register(router, deps.llm_configs.clone());
    handlers::llm_models::register(router, deps.llm_models.clone());
    handlers::personality_definitions::register(router, deps.personality_definitions.clone());
    handlers::chat::register(router, deps.orchestrator.clone(), deps.surfaces.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_contracts::channels;
    use colloquy_models::ProcessingResult;
    use colloquy_traits::mock::{
        InMemoryAgentRepository, InMemoryConversationAgentRepository,
        InMemoryConversationRepository, InMemoryLlmConfigRepository, InMemoryMessageRepository,
        InMemoryPersonalityRepository, InMemoryRoleRepository, InMemorySettingsRepository,
        MockOrchestrator, MockSurfaceRegistry, RecordingTransactionProvider,
        StaticDefinitionsProvider, StaticModelCatalog,
    };
    use serde_json::{Value, json};

    pub(crate) fn test_deps() -> IpcDeps {
        IpcDeps {
            mode: RuntimeMode::Production,
            settings: Arc::new(InMemorySettingsRepository::default()),
            roles: Arc::new(InMemoryRoleRepository::default()),
            personalities: Arc::new(InMemoryPersonalityRepository::default()),
            agents: Arc::new(InMemoryAgentRepository::default()),
            conversations: Arc::new(InMemoryConversationRepository::default()),
            conversation_agents: Arc::new(InMemoryConversationAgentRepository::default()),
            messages: Arc::new(InMemoryMessageRepository::default()),
            llm_configs: Arc::new(InMemoryLlmConfigRepository::default()),
            llm_models: Arc::new(StaticModelCatalog::default()),
            personality_definitions: Arc::new(StaticDefinitionsProvider {
                definitions: json!({}),
            }),
            transactions: Arc::new(RecordingTransactionProvider::default()),
            orchestrator: Arc::new(MockOrchestrator::succeeding(ProcessingResult {
                total_agents: 0,
                successful_agents: 0,
                failed_agents: 0,
                duration_ms: 0,
                errors: vec![],
            })),
            surfaces: Arc::new(MockSurfaceRegistry::default()),
        }
    }

    #[test]
    fn every_active_channel_is_registered() {
        let router = build_router(&test_deps());
        let reserved = [
            channels::llm_models::SAVE,
            channels::llm_models::RESET,
            channels::messages::DELETE,
            channels::chat::ALL_COMPLETE,
            channels::chat::AGENT_UPDATE,
        ];
        for (_, all) in channels::all_domains() {
            for channel in all {
                let expected = !reserved.contains(channel);
                assert_eq!(
                    router.is_registered(channel),
                    expected,
                    "registration mismatch for {channel}"
                );
            }
        }
    }

    #[tokio::test]
    async fn a_built_router_serves_requests_immediately() {
        let router = build_router(&test_deps());
        let out = router
            .invoke(channels::settings::LOAD, Value::Null)
            .await
            .unwrap();
        assert_eq!(out["success"], json!(true));
    }
}
