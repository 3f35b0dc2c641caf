//! Chat orchestration outcomes.

use serde::{Deserialize, Serialize};

/// Summary of one agent-processing round for a conversation.
///
/// Produced by the orchestration service when every participating agent has
/// either responded or failed. The dispatch handler only logs these counters;
/// nothing downstream consumes them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub total_agents: u32,
    pub successful_agents: u32,
    pub failed_agents: u32,
    pub duration_ms: u64,
    /// Per-agent error descriptions for the failed subset.
    #[serde(default)]
    pub errors: Vec<String>,
}
