//! Typed renderer-side bridge.
//!
//! [`RendererBridge`] is the renderer's whole API surface: one method per
//! channel, each unwrapping the `{success, data?, error?}` envelope into a
//! plain `Result`. Failures split into [`BridgeError::Remote`] (the main
//! process answered with an error envelope) and [`BridgeError::Transport`]
//! (the invoke itself failed or the response was not an envelope). The
//! envelope never leaks to bridge callers.

use anyhow::Result;
use async_trait::async_trait;
use colloquy_contracts::requests::{
    DeleteConversationRequest, DeleteLlmConfigRequest, GetByConversationRequest,
    GetConversationRequest, ListMessagesRequest, ReadLlmConfigRequest, SaveAgentsRequest,
    SavePersonalitiesRequest, SaveRolesRequest, SaveSettingsRequest, SendToAgentsRequest,
    SetDebugLoggingRequest, UpdateConversationAgentRequest, UpdateConversationRequest,
    UpdateLlmConfigRequest, UpdateMessageInclusionRequest,
};
use colloquy_contracts::{IpcResponse, SerializableError, channels, codes};
use colloquy_models::{
    AddConversationAgentInput, Agent, AgentLibrary, AppSettings, Conversation, ConversationAgent,
    CreateConversationInput, CreateMessageInput, LlmConfig, LlmConfigInput, LlmConfigPatch,
    LlmModel, Message, Personality, PersonalityLibrary, Role, RoleLibrary, SettingsPatch,
    UpdateConversationAgentInput, UpdateConversationInput,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use crate::router::IpcRouter;

/// Message used when a failure reaches the renderer without a usable one.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to communicate with main process";

/// Abstraction over the invoke transport, so the bridge can run against the
/// in-process router in tests and against the real window plumbing in the
/// application shell.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, channel: &str, payload: Value) -> Result<Value>;
}

#[async_trait]
impl Invoker for IpcRouter {
    async fn invoke(&self, channel: &str, payload: Value) -> Result<Value> {
        IpcRouter::invoke(self, channel, payload).await
    }
}

/// A failure surfaced to renderer code.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The main process handled the call and answered with an error envelope.
    #[error("{message}")]
    Remote { message: String, code: String },
    /// The call never produced a usable envelope.
    #[error("Failed to communicate with main process")]
    Transport(#[source] anyhow::Error),
}

impl BridgeError {
    pub fn code(&self) -> &str {
        match self {
            Self::Remote { code, .. } => code,
            Self::Transport(_) => codes::UNKNOWN_ERROR,
        }
    }
}

pub struct RendererBridge {
    invoker: Arc<dyn Invoker>,
}

impl RendererBridge {
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }

    // --- settings ---

    pub async fn load_settings(&self) -> Result<AppSettings, BridgeError> {
        self.call(channels::settings::LOAD, Value::Null, "Failed to load settings")
            .await
    }

    pub async fn save_settings(&self, settings: SettingsPatch) -> Result<(), BridgeError> {
        self.call_unit(
            channels::settings::SAVE,
            &SaveSettingsRequest { settings },
            "Failed to save settings",
        )
        .await
    }

    pub async fn reset_settings(&self) -> Result<AppSettings, BridgeError> {
        self.call(
            channels::settings::RESET,
            Value::Null,
            "Failed to reset settings",
        )
        .await
    }

    pub async fn set_debug_logging(&self, enabled: bool) -> Result<(), BridgeError> {
        self.call_unit(
            channels::settings::SET_DEBUG_LOGGING,
            &SetDebugLoggingRequest { enabled },
            "Failed to update debug logging",
        )
        .await
    }

    // --- libraries ---

    pub async fn load_roles(&self) -> Result<Option<RoleLibrary>, BridgeError> {
        self.call_opt(channels::roles::LOAD, Value::Null, "Failed to load roles")
            .await
    }

    pub async fn save_roles(&self, roles: Vec<Role>) -> Result<(), BridgeError> {
        self.call_unit(
            channels::roles::SAVE,
            &SaveRolesRequest { roles },
            "Failed to save roles",
        )
        .await
    }

    pub async fn reset_roles(&self) -> Result<(), BridgeError> {
        self.call_unit(channels::roles::RESET, &Value::Null, "Failed to reset roles")
            .await
    }

    pub async fn load_personalities(&self) -> Result<Option<PersonalityLibrary>, BridgeError> {
        self.call_opt(
            channels::personalities::LOAD,
            Value::Null,
            "Failed to load personalities",
        )
        .await
    }

    pub async fn save_personalities(
        &self,
        personalities: Vec<Personality>,
    ) -> Result<(), BridgeError> {
        self.call_unit(
            channels::personalities::SAVE,
            &SavePersonalitiesRequest { personalities },
            "Failed to save personalities",
        )
        .await
    }

    pub async fn reset_personalities(&self) -> Result<(), BridgeError> {
        self.call_unit(
            channels::personalities::RESET,
            &Value::Null,
            "Failed to reset personalities",
        )
        .await
    }

    pub async fn load_agents(&self) -> Result<Option<AgentLibrary>, BridgeError> {
        self.call_opt(channels::agents::LOAD, Value::Null, "Failed to load agents")
            .await
    }

    pub async fn save_agents(&self, agents: Vec<Agent>) -> Result<(), BridgeError> {
        self.call_unit(
            channels::agents::SAVE,
            &SaveAgentsRequest { agents },
            "Failed to save agents",
        )
        .await
    }

    pub async fn reset_agents(&self) -> Result<(), BridgeError> {
        self.call_unit(
            channels::agents::RESET,
            &Value::Null,
            "Failed to reset agents",
        )
        .await
    }

    // --- conversations ---

    pub async fn create_conversation(
        &self,
        input: CreateConversationInput,
    ) -> Result<Conversation, BridgeError> {
        self.call_with(
            channels::conversations::CREATE,
            &input,
            "Failed to create conversation",
        )
        .await
    }

    pub async fn list_conversations(&self) -> Result<Vec<Conversation>, BridgeError> {
        self.call(
            channels::conversations::LIST,
            Value::Null,
            "Failed to list conversations",
        )
        .await
    }

    pub async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>, BridgeError> {
        let payload = encode(&GetConversationRequest { id: id.to_string() })?;
        self.call_opt(
            channels::conversations::GET,
            payload,
            "Failed to load conversation",
        )
        .await
    }

    pub async fn update_conversation(
        &self,
        id: &str,
        updates: UpdateConversationInput,
    ) -> Result<Conversation, BridgeError> {
        self.call_with(
            channels::conversations::UPDATE,
            &UpdateConversationRequest {
                id: id.to_string(),
                updates,
            },
            "Failed to update conversation",
        )
        .await
    }

    pub async fn delete_conversation(&self, id: &str) -> Result<(), BridgeError> {
        self.call_unit(
            channels::conversations::DELETE,
            &DeleteConversationRequest { id: id.to_string() },
            "Failed to delete conversation",
        )
        .await
    }

    // --- conversation agents ---

    pub async fn get_conversation_agents(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<ConversationAgent>, BridgeError> {
        self.call_with(
            channels::conversation_agent::GET_BY_CONVERSATION,
            &GetByConversationRequest {
                conversation_id: conversation_id.to_string(),
            },
            "Failed to load conversation agents",
        )
        .await
    }

    pub async fn add_conversation_agent(
        &self,
        input: AddConversationAgentInput,
    ) -> Result<ConversationAgent, BridgeError> {
        self.call_with(
            channels::conversation_agent::ADD,
            &input,
            "Failed to add conversation agent",
        )
        .await
    }

    pub async fn update_conversation_agent(
        &self,
        conversation_id: &str,
        agent_id: &str,
        updates: UpdateConversationAgentInput,
    ) -> Result<ConversationAgent, BridgeError> {
        self.call_with(
            channels::conversation_agent::UPDATE,
            &UpdateConversationAgentRequest {
                conversation_id: conversation_id.to_string(),
                agent_id: agent_id.to_string(),
                updates,
            },
            "Failed to update conversation agent",
        )
        .await
    }

    /// Resolves `false` when no matching membership exists.
    pub async fn remove_conversation_agent(
        &self,
        conversation_id: &str,
        agent_id: &str,
    ) -> Result<bool, BridgeError> {
        self.call_with(
            channels::conversation_agent::REMOVE,
            &colloquy_contracts::requests::RemoveConversationAgentRequest {
                conversation_id: conversation_id.to_string(),
                agent_id: agent_id.to_string(),
            },
            "Failed to remove conversation agent",
        )
        .await
    }

    pub async fn list_conversation_agents(&self) -> Result<Vec<ConversationAgent>, BridgeError> {
        self.call(
            channels::conversation_agent::LIST,
            Value::Null,
            "Failed to list conversation agents",
        )
        .await
    }

    // --- messages ---

    pub async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>, BridgeError> {
        self.call_with(
            channels::messages::LIST,
            &ListMessagesRequest {
                conversation_id: conversation_id.to_string(),
            },
            "Failed to list messages",
        )
        .await
    }

    pub async fn create_message(&self, input: CreateMessageInput) -> Result<Message, BridgeError> {
        self.call_with(channels::messages::CREATE, &input, "Failed to create message")
            .await
    }

    pub async fn update_message_inclusion(
        &self,
        message_id: &str,
        included_in_context: bool,
    ) -> Result<Message, BridgeError> {
        self.call_with(
            channels::messages::UPDATE_INCLUSION,
            &UpdateMessageInclusionRequest {
                message_id: message_id.to_string(),
                included_in_context,
            },
            "Failed to update message",
        )
        .await
    }

    // --- llm configuration ---

    pub async fn create_llm_config(&self, input: LlmConfigInput) -> Result<LlmConfig, BridgeError> {
        self.call_with(
            channels::llm_config::CREATE,
            &input,
            "Failed to create configuration",
        )
        .await
    }

    pub async fn read_llm_config(&self, id: &str) -> Result<Option<LlmConfig>, BridgeError> {
        let payload = encode(&ReadLlmConfigRequest { id: id.to_string() })?;
        self.call_opt(
            channels::llm_config::READ,
            payload,
            "Failed to load configuration",
        )
        .await
    }

    pub async fn update_llm_config(
        &self,
        id: &str,
        updates: LlmConfigPatch,
    ) -> Result<LlmConfig, BridgeError> {
        self.call_with(
            channels::llm_config::UPDATE,
            &UpdateLlmConfigRequest {
                id: id.to_string(),
                updates,
            },
            "Failed to update configuration",
        )
        .await
    }

    pub async fn delete_llm_config(&self, id: &str) -> Result<(), BridgeError> {
        self.call_unit(
            channels::llm_config::DELETE,
            &DeleteLlmConfigRequest { id: id.to_string() },
            "Failed to delete configuration",
        )
        .await
    }

    pub async fn list_llm_configs(&self) -> Result<Vec<LlmConfig>, BridgeError> {
        self.call(
            channels::llm_config::LIST,
            Value::Null,
            "Failed to list configurations",
        )
        .await
    }

    pub async fn initialize_llm_configs(&self) -> Result<(), BridgeError> {
        self.call_unit(
            channels::llm_config::INITIALIZE,
            &Value::Null,
            "Failed to initialize configurations",
        )
        .await
    }

    pub async fn refresh_llm_config_cache(&self) -> Result<(), BridgeError> {
        self.call_unit(
            channels::llm_config::REFRESH_CACHE,
            &Value::Null,
            "Failed to refresh configurations",
        )
        .await
    }

    pub async fn load_llm_models(&self) -> Result<Vec<LlmModel>, BridgeError> {
        self.call(channels::llm_models::LOAD, Value::Null, "Failed to load models")
            .await
    }

    // --- personality definitions ---

    pub async fn get_personality_definitions(&self) -> Result<Value, BridgeError> {
        self.call(
            channels::personality::GET_DEFINITIONS,
            Value::Null,
            "Failed to load personality definitions",
        )
        .await
    }

    // --- chat ---

    /// Fire-and-forget dispatch. Resolves as soon as the round is accepted;
    /// completion arrives later as a `chat:allComplete` broadcast. The
    /// rejection path carries the validation message rather than an envelope.
    pub async fn send_to_agents(
        &self,
        conversation_id: &str,
        user_message_id: &str,
    ) -> Result<(), BridgeError> {
        let payload = encode(&SendToAgentsRequest {
            conversation_id: conversation_id.to_string(),
            user_message_id: user_message_id.to_string(),
        })?;
        self.invoker
            .invoke(channels::chat::SEND_TO_AGENTS, payload)
            .await
            .map(|_| ())
            .map_err(|err| BridgeError::Remote {
                message: err.to_string(),
                code: codes::UNKNOWN_ERROR.to_string(),
            })
    }

    // --- envelope plumbing ---

    async fn call<T: DeserializeOwned>(
        &self,
        channel: &str,
        payload: Value,
        fallback: &str,
    ) -> Result<T, BridgeError> {
        let envelope = self.exchange::<T>(channel, payload).await?;
        if envelope.success {
            envelope.data.ok_or_else(|| BridgeError::Remote {
                message: fallback.to_string(),
                code: codes::UNKNOWN_ERROR.to_string(),
            })
        } else {
            Err(remote_error(envelope.error, fallback))
        }
    }

    async fn call_with<Req: Serialize, T: DeserializeOwned>(
        &self,
        channel: &str,
        request: &Req,
        fallback: &str,
    ) -> Result<T, BridgeError> {
        let payload = encode(request)?;
        self.call(channel, payload, fallback).await
    }

    async fn call_opt<T: DeserializeOwned>(
        &self,
        channel: &str,
        payload: Value,
        fallback: &str,
    ) -> Result<Option<T>, BridgeError> {
        let envelope = self.exchange::<T>(channel, payload).await?;
        if envelope.success {
            Ok(envelope.data)
        } else {
            Err(remote_error(envelope.error, fallback))
        }
    }

    async fn call_unit<Req: Serialize>(
        &self,
        channel: &str,
        request: &Req,
        fallback: &str,
    ) -> Result<(), BridgeError> {
        let payload = encode(request)?;
        let envelope = self.exchange::<Value>(channel, payload).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(remote_error(envelope.error, fallback))
        }
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        channel: &str,
        payload: Value,
    ) -> Result<IpcResponse<T>, BridgeError> {
        let raw = self
            .invoker
            .invoke(channel, payload)
            .await
            .map_err(BridgeError::Transport)?;
        serde_json::from_value(raw)
            .map_err(|err| BridgeError::Transport(anyhow::Error::new(err)))
    }
}

fn encode<Req: Serialize>(request: &Req) -> Result<Value, BridgeError> {
    serde_json::to_value(request).map_err(|err| BridgeError::Transport(anyhow::Error::new(err)))
}

fn remote_error(error: Option<SerializableError>, fallback: &str) -> BridgeError {
    match error {
        Some(err) if !err.message.is_empty() => BridgeError::Remote {
            message: err.message,
            code: err.code,
        },
        Some(err) => BridgeError::Remote {
            message: fallback.to_string(),
            code: err.code,
        },
        None => BridgeError::Remote {
            message: fallback.to_string(),
            code: codes::UNKNOWN_ERROR.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::RuntimeMode;
    use crate::router::EmptyRequest;
    use anyhow::bail;
    use colloquy_traits::mock::InMemorySettingsRepository;
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn bridge_over(router: IpcRouter) -> RendererBridge {
        RendererBridge::new(Arc::new(router))
    }

    #[tokio::test]
    async fn successful_data_is_unwrapped() {
        let repo = Arc::new(InMemorySettingsRepository::default());
        let mut router = IpcRouter::new(RuntimeMode::Production);
        crate::handlers::settings::register(&mut router, repo);
        let bridge = bridge_over(router);

        let settings = bridge.load_settings().await.unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn error_envelopes_become_remote_errors() {
        let repo = Arc::new(InMemorySettingsRepository::default());
        repo.fail_load.store(true, Ordering::SeqCst);
        let mut router = IpcRouter::new(RuntimeMode::Production);
        crate::handlers::settings::register(&mut router, repo);
        let bridge = bridge_over(router);

        let err = bridge.load_settings().await.unwrap_err();
        match err {
            BridgeError::Remote { message, code } => {
                assert_eq!(message, "settings load failed");
                assert_eq!(code, codes::UNKNOWN_ERROR);
            }
            BridgeError::Transport(_) => panic!("expected a remote error"),
        }
    }

    #[tokio::test]
    async fn optional_loads_map_empty_success_to_none() {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        crate::handlers::roles::register(
            &mut router,
            Arc::new(colloquy_traits::mock::InMemoryRoleRepository::default()),
        );
        let bridge = bridge_over(router);

        assert!(bridge.load_roles().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn success_without_expected_data_uses_the_fallback_message() {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        router.handle_opt("settings:load", |_: EmptyRequest| async move {
            Ok(None::<AppSettings>)
        });
        let bridge = bridge_over(router);

        let err = bridge.load_settings().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load settings");
        assert_eq!(err.code(), codes::UNKNOWN_ERROR);
    }

    #[tokio::test]
    async fn unregistered_channels_surface_as_transport_errors() {
        let router = IpcRouter::new(RuntimeMode::Production);
        let bridge = bridge_over(router);

        let err = bridge.load_settings().await.unwrap_err();
        assert!(matches!(err, BridgeError::Transport(_)));
        assert_eq!(err.to_string(), TRANSPORT_FAILURE_MESSAGE);
    }

    fn empty_message_envelope() -> Value {
        json!({
            "success": false,
            "error": { "message": "", "code": "STORAGE_ERROR" }
        })
    }

    #[tokio::test]
    async fn empty_remote_messages_fall_back_per_operation() {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        router.register(
            "settings:save",
            Arc::new(|_| Box::pin(async move { Ok(empty_message_envelope()) })),
        );
        let bridge = bridge_over(router);

        let err = bridge.save_settings(SettingsPatch::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to save settings");
        assert_eq!(err.code(), "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn empty_remote_messages_on_optional_loads_fall_back_per_operation() {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        router.register(
            "roles:load",
            Arc::new(|_| Box::pin(async move { Ok(empty_message_envelope()) })),
        );
        let bridge = bridge_over(router);

        let err = bridge.load_roles().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load roles");
        assert_eq!(err.code(), "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn send_to_agents_rejection_carries_the_validation_message() {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        router.register(
            channels::chat::SEND_TO_AGENTS,
            Arc::new(|_| {
                Box::pin(async move { bail!("conversationId is required and must be a non-empty string") })
            }),
        );
        let bridge = bridge_over(router);

        let err = bridge.send_to_agents("", "msg-1").await.unwrap_err();
        assert!(err.to_string().contains("conversationId is required"));
    }

    #[tokio::test]
    async fn send_to_agents_resolves_unit_on_acceptance() {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        router.register(
            channels::chat::SEND_TO_AGENTS,
            Arc::new(|_| Box::pin(async move { Ok(Value::Null) })),
        );
        let bridge = bridge_over(router);

        bridge.send_to_agents("conv-1", "msg-1").await.unwrap();
    }
}
