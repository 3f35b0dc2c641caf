//! Wire contracts shared by the Colloquy main process and renderer bridge.
//!
//! Every invoke-style call exchanges one request payload for one
//! [`IpcResponse`] envelope on a named channel; broadcasts push event
//! payloads to all renderer surfaces with no acknowledgment. Channel names,
//! envelope shapes, and event payloads are all defined here so the two sides
//! can only drift apart by failing to compile.

pub mod channels;
pub mod codes;
pub mod envelope;
pub mod events;
pub mod requests;

pub use envelope::{IpcResponse, SerializableError};
pub use events::{AgentUpdateEvent, AgentUpdateStatus, AllCompleteEvent};
