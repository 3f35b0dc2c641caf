//! Agent definitions.

use serde::{Deserialize, Serialize};

use crate::time::now_ms;

/// An agent combines a role, a personality, and a model choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    /// Role id from the role library.
    pub role: String,
    /// Personality id from the personality library.
    pub personality: String,
    /// LLM config id used when this agent responds.
    pub model: String,
    #[serde(default)]
    pub is_active: bool,
}

/// The full set of user-defined agents, persisted as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentLibrary {
    pub agents: Vec<Agent>,
    pub last_updated: i64,
}

impl AgentLibrary {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self {
            agents,
            last_updated: now_ms(),
        }
    }
}
