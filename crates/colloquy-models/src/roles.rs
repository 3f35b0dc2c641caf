//! Conversational roles assignable to agents.

use serde::{Deserialize, Serialize};

use crate::time::now_ms;

/// A role describes the function an agent plays in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Prompt fragment injected into the agent's system prompt.
    pub system_prompt: String,
}

/// The full set of user-defined roles, persisted as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleLibrary {
    pub roles: Vec<Role>,
    pub last_updated: i64,
}

impl RoleLibrary {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles,
            last_updated: now_ms(),
        }
    }
}
