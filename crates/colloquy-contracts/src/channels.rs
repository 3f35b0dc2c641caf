//! Channel registries: one module per domain, one constant per operation.
//!
//! Wire names follow `"<domain>:<verb>"` with camelCase multi-word verbs.
//! The `<domain>:` prefix namespaces channels so collisions across domains
//! are structurally impossible; within a domain, uniqueness is a tested
//! invariant (each module's `ALL` slice feeds the test).

/// Settings channels.
pub mod settings {
    pub const LOAD: &str = "settings:load";
    pub const SAVE: &str = "settings:save";
    pub const RESET: &str = "settings:reset";
    pub const SET_DEBUG_LOGGING: &str = "settings:setDebugLogging";

    pub const ALL: &[&str] = &[LOAD, SAVE, RESET, SET_DEBUG_LOGGING];
}

/// Role library channels.
pub mod roles {
    pub const LOAD: &str = "roles:load";
    pub const SAVE: &str = "roles:save";
    pub const RESET: &str = "roles:reset";

    pub const ALL: &[&str] = &[LOAD, SAVE, RESET];
}

/// Personality library channels.
pub mod personalities {
    pub const LOAD: &str = "personalities:load";
    pub const SAVE: &str = "personalities:save";
    pub const RESET: &str = "personalities:reset";

    pub const ALL: &[&str] = &[LOAD, SAVE, RESET];
}

/// Agent library channels.
pub mod agents {
    pub const LOAD: &str = "agents:load";
    pub const SAVE: &str = "agents:save";
    pub const RESET: &str = "agents:reset";

    pub const ALL: &[&str] = &[LOAD, SAVE, RESET];
}

/// LLM configuration channels.
pub mod llm_config {
    pub const CREATE: &str = "llmConfig:create";
    pub const READ: &str = "llmConfig:read";
    pub const UPDATE: &str = "llmConfig:update";
    pub const DELETE: &str = "llmConfig:delete";
    pub const LIST: &str = "llmConfig:list";
    pub const INITIALIZE: &str = "llmConfig:initialize";
    pub const REFRESH_CACHE: &str = "llmConfig:refreshCache";

    pub const ALL: &[&str] = &[CREATE, READ, UPDATE, DELETE, LIST, INITIALIZE, REFRESH_CACHE];
}

/// LLM model listing channels. Save and reset are reserved: the constants
/// exist for the bridge surface but no handler is registered for them.
pub mod llm_models {
    pub const LOAD: &str = "llmModels:load";
    pub const SAVE: &str = "llmModels:save";
    pub const RESET: &str = "llmModels:reset";

    pub const ALL: &[&str] = &[LOAD, SAVE, RESET];
}

/// Conversation channels.
pub mod conversations {
    pub const CREATE: &str = "conversations:create";
    pub const LIST: &str = "conversations:list";
    pub const GET: &str = "conversations:get";
    pub const UPDATE: &str = "conversations:update";
    pub const DELETE: &str = "conversations:delete";

    pub const ALL: &[&str] = &[CREATE, LIST, GET, UPDATE, DELETE];
}

/// Conversation-agent membership channels.
pub mod conversation_agent {
    pub const GET_BY_CONVERSATION: &str = "conversationAgent:getByConversation";
    pub const ADD: &str = "conversationAgent:add";
    pub const UPDATE: &str = "conversationAgent:update";
    pub const REMOVE: &str = "conversationAgent:remove";
    pub const LIST: &str = "conversationAgent:list";

    pub const ALL: &[&str] = &[GET_BY_CONVERSATION, ADD, UPDATE, REMOVE, LIST];
}

/// Message channels. Delete is reserved.
pub mod messages {
    pub const LIST: &str = "messages:list";
    pub const CREATE: &str = "messages:create";
    pub const UPDATE_INCLUSION: &str = "messages:updateInclusion";
    pub const DELETE: &str = "messages:delete";

    pub const ALL: &[&str] = &[LIST, CREATE, UPDATE_INCLUSION, DELETE];
}

/// Chat channels: one invoke trigger plus broadcast event streams.
pub mod chat {
    /// Invoke: validate and dispatch an agent-processing round.
    pub const SEND_TO_AGENTS: &str = "chat:sendToAgents";
    /// Broadcast: a conversation's agent-processing round finished.
    pub const ALL_COMPLETE: &str = "chat:allComplete";
    /// Broadcast: per-agent progress during a round.
    pub const AGENT_UPDATE: &str = "chat:agentUpdate";

    pub const ALL: &[&str] = &[SEND_TO_AGENTS, ALL_COMPLETE, AGENT_UPDATE];
}

/// Personality definitions channels.
pub mod personality {
    pub const GET_DEFINITIONS: &str = "personality:getDefinitions";

    pub const ALL: &[&str] = &[GET_DEFINITIONS];
}

/// Every domain registry, for cross-domain checks and bridge enumeration.
pub fn all_domains() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("settings", settings::ALL),
        ("roles", roles::ALL),
        ("personalities", personalities::ALL),
        ("agents", agents::ALL),
        ("llmConfig", llm_config::ALL),
        ("llmModels", llm_models::ALL),
        ("conversations", conversations::ALL),
        ("conversationAgent", conversation_agent::ALL),
        ("messages", messages::ALL),
        ("chat", chat::ALL),
        ("personality", personality::ALL),
    ]
}
