//! Fan-out of push events to renderer surfaces.

use colloquy_traits::SurfaceRegistry;
use serde::Serialize;
use tracing::{error, warn};

/// Send an event to every live surface, skipping destroyed ones.
///
/// Delivery is best-effort: a surface that fails to accept the payload is
/// logged and skipped, never retried. Returns the number of surfaces the
/// event actually reached.
pub fn broadcast<T: Serialize>(registry: &dyn SurfaceRegistry, channel: &str, event: &T) -> usize {
    let payload = match serde_json::to_value(event) {
        Ok(value) => value,
        Err(err) => {
            error!(channel, error = %err, "failed to encode broadcast payload");
            return 0;
        }
    };

    let mut delivered = 0;
    for surface in registry.surfaces() {
        if surface.is_destroyed() {
            continue;
        }
        match surface.send(channel, payload.clone()) {
            Ok(()) => delivered += 1,
            Err(err) => warn!(channel, error = %err, "failed to deliver broadcast"),
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_contracts::AllCompleteEvent;
    use colloquy_contracts::channels;
    use colloquy_traits::mock::{MockSurface, MockSurfaceRegistry};
    use serde_json::json;

    #[test]
    fn reaches_every_live_surface() {
        let a = MockSurface::new();
        let b = MockSurface::new();
        let registry = MockSurfaceRegistry::new(vec![a.clone(), b.clone()]);

        let delivered = broadcast(
            &registry,
            channels::chat::ALL_COMPLETE,
            &AllCompleteEvent::new("conv-1"),
        );

        assert_eq!(delivered, 2);
        assert_eq!(
            a.received_on(channels::chat::ALL_COMPLETE),
            vec![json!({ "conversationId": "conv-1" })]
        );
        assert_eq!(b.received_on(channels::chat::ALL_COMPLETE).len(), 1);
    }

    #[test]
    fn skips_destroyed_surfaces() {
        let live = MockSurface::new();
        let dead = MockSurface::new();
        dead.destroy();
        let registry = MockSurfaceRegistry::new(vec![live.clone(), dead.clone()]);

        let delivered = broadcast(
            &registry,
            channels::chat::ALL_COMPLETE,
            &AllCompleteEvent::new("conv-1"),
        );

        assert_eq!(delivered, 1);
        assert_eq!(dead.received_count(), 0);
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let registry = MockSurfaceRegistry::new(vec![]);
        let delivered = broadcast(
            &registry,
            channels::chat::ALL_COMPLETE,
            &AllCompleteEvent::new("conv-1"),
        );
        assert_eq!(delivered, 0);
    }
}
