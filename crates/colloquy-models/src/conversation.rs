//! Conversations and conversation-agent membership.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::now_ms;

/// A chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Conversation {
    pub fn new(title: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateConversationInput {
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateConversationInput {
    pub title: Option<String>,
    pub is_active: Option<bool>,
}

/// Membership record linking an agent to a conversation.
///
/// At most one record exists per (conversation, agent) pair; repositories
/// enforce this uniqueness on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAgent {
    pub conversation_id: String,
    pub agent_id: String,
    pub is_active: bool,
    pub display_order: u32,
    pub added_at: i64,
}

impl ConversationAgent {
    pub fn new(conversation_id: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            agent_id: agent_id.into(),
            is_active: true,
            display_order: 0,
            added_at: now_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConversationAgentInput {
    pub conversation_id: String,
    pub agent_id: String,
    #[serde(default)]
    pub display_order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateConversationAgentInput {
    pub is_active: Option<bool>,
    pub display_order: Option<u32>,
}
