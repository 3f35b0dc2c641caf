//! Per-domain handler registration.
//!
//! Each module owns one channel domain and exposes a `register` function
//! taking the router plus the repositories it needs. The composition root in
//! [`crate::state`] wires them all up; nothing here reaches for globals.

pub mod agents;
pub mod chat;
pub mod conversation_agents;
pub mod conversations;
pub mod llm_config;
pub mod llm_models;
pub mod messages;
pub mod personalities;
pub mod personality_definitions;
pub mod roles;
pub mod settings;
