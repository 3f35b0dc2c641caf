//! Renderer surface enumeration for broadcasts.

use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

/// One live UI window or view capable of receiving broadcast events.
pub trait RendererSurface: Send + Sync {
    /// True once the surface has been closed; broadcasts skip it.
    fn is_destroyed(&self) -> bool;
    /// Push an event payload on a channel. Fire-and-forget; errors are logged
    /// by the broadcaster and never fail the operation that triggered them.
    fn send(&self, channel: &str, payload: Value) -> Result<()>;
}

/// Enumerates the surfaces alive right now. Broadcasters re-query at send
/// time rather than caching the list.
pub trait SurfaceRegistry: Send + Sync {
    fn surfaces(&self) -> Vec<Arc<dyn RendererSurface>>;
}
