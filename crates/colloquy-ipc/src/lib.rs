//! The Colloquy IPC layer.
//!
//! This crate is the main-process side of the renderer boundary: it owns the
//! channel router, the per-domain handler registrations, the error
//! classifier that turns arbitrary failures into the renderer-safe
//! [`colloquy_contracts::SerializableError`] shape, the fire-and-forget chat
//! dispatcher, and the typed renderer bridge. Persistence and orchestration
//! are reached only through the traits in `colloquy-traits`, injected once
//! by the composition root in [`state`].

pub mod bridge;
pub mod broadcast;
pub mod handlers;
pub mod mode;
pub mod router;
pub mod sanitize;
pub mod serialize;
pub mod state;
pub mod telemetry;

pub use bridge::{BridgeError, Invoker, RendererBridge};
pub use mode::RuntimeMode;
pub use router::IpcRouter;
pub use serialize::{error_response, serialize_error, success_response};
pub use state::{IpcDeps, build_router};
