//! Conversation messages.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::now_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Agent,
    System,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    /// Set when the message was produced by an agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    pub role: MessageRole,
    pub content: String,
    /// Whether the message is part of the context sent to agents.
    pub included_in_context: bool,
    pub created_at: i64,
}

impl Message {
    pub fn from_input(input: CreateMessageInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            conversation_id: input.conversation_id,
            agent_id: input.agent_id,
            role: input.role,
            content: input.content,
            included_in_context: input.included_in_context,
            created_at: now_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageInput {
    pub conversation_id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    pub role: MessageRole,
    pub content: String,
    #[serde(default = "default_included")]
    pub included_in_context: bool,
}

fn default_included() -> bool {
    true
}
