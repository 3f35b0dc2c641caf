//! Broadcast event payloads.
//!
//! These are pushed to every live renderer surface via the event channels in
//! [`crate::channels::chat`]; there is no acknowledgment and no retry.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Terminal signal: the conversation's agent-processing round finished.
///
/// Emitted exactly once per dispatch, whether the round succeeded or failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AllCompleteEvent {
    pub conversation_id: String,
}

impl AllCompleteEvent {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
        }
    }
}

/// Per-agent progress within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AgentUpdateStatus {
    Thinking,
    Complete,
    Error,
}

/// Progress event for a single conversation agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AgentUpdateEvent {
    pub conversation_id: String,
    pub agent_id: String,
    pub status: AgentUpdateStatus,
    /// Set when the agent produced a message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Set when the agent failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentUpdateEvent {
    pub fn thinking(conversation_id: &str, agent_id: &str) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
            agent_id: agent_id.to_string(),
            status: AgentUpdateStatus::Thinking,
            message_id: None,
            error: None,
        }
    }

    pub fn complete(conversation_id: &str, agent_id: &str, message_id: &str) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
            agent_id: agent_id.to_string(),
            status: AgentUpdateStatus::Complete,
            message_id: Some(message_id.to_string()),
            error: None,
        }
    }

    pub fn error(conversation_id: &str, agent_id: &str, error: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
            agent_id: agent_id.to_string(),
            status: AgentUpdateStatus::Error,
            message_id: None,
            error: Some(error.into()),
        }
    }
}
