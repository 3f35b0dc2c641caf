//! Request payloads, one shape per invoke operation.
//!
//! Operations whose input is a whole domain input type (conversation create,
//! message create, LLM config create) take that model directly on the wire;
//! the structs here cover operations keyed by ids or flags. No-argument
//! operations accept a null or empty-object payload and have no request type.

use colloquy_models::{LlmConfigPatch, SettingsPatch, UpdateConversationAgentInput,
    UpdateConversationInput};
use serde::{Deserialize, Serialize};

// --- settings ---

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveSettingsRequest {
    pub settings: SettingsPatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDebugLoggingRequest {
    pub enabled: bool,
}

// --- libraries ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRolesRequest {
    pub roles: Vec<colloquy_models::Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePersonalitiesRequest {
    pub personalities: Vec<colloquy_models::Personality>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAgentsRequest {
    pub agents: Vec<colloquy_models::Agent>,
}

// --- conversations ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetConversationRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConversationRequest {
    pub id: String,
    #[serde(default)]
    pub updates: UpdateConversationInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConversationRequest {
    pub id: String,
}

// --- conversation agents ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetByConversationRequest {
    pub conversation_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConversationAgentRequest {
    pub conversation_id: String,
    pub agent_id: String,
    #[serde(default)]
    pub updates: UpdateConversationAgentInput,
}

/// Composite-key removal request. The handler looks the record up first and
/// answers `data: false` when nothing matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveConversationAgentRequest {
    pub conversation_id: String,
    pub agent_id: String,
}

// --- messages ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesRequest {
    pub conversation_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageInclusionRequest {
    pub message_id: String,
    pub included_in_context: bool,
}

// --- llm config ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadLlmConfigRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLlmConfigRequest {
    pub id: String,
    #[serde(default)]
    pub updates: LlmConfigPatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLlmConfigRequest {
    pub id: String,
}

// --- chat ---

/// Trigger for one agent-processing round. Both ids must be non-empty; the
/// dispatch handler rejects the call before touching the orchestrator
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendToAgentsRequest {
    pub conversation_id: String,
    pub user_message_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_to_agents_parses_camel_case() {
        let req: SendToAgentsRequest = serde_json::from_value(serde_json::json!({
            "conversationId": "conv-123",
            "userMessageId": "user-msg-123"
        }))
        .unwrap();
        assert_eq!(req.conversation_id, "conv-123");
        assert_eq!(req.user_message_id, "user-msg-123");
    }

    #[test]
    fn update_requests_tolerate_missing_patch() {
        let req: UpdateConversationRequest =
            serde_json::from_value(serde_json::json!({ "id": "conv-1" })).unwrap();
        assert_eq!(req.updates, UpdateConversationInput::default());
    }
}
