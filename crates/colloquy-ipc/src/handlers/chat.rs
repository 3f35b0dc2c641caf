//! Chat dispatch handler.
//!
//! `chat:sendToAgents` is fire-and-forget: it validates the payload, spawns
//! the orchestration round, and resolves immediately with `null` rather than
//! an envelope. Validation failures reject the invoke itself. The spawned
//! task broadcasts `chat:allComplete` to every live surface exactly once,
//! whether the round succeeded or failed, so the renderer can always leave
//! its loading state.

use anyhow::bail;
use colloquy_contracts::channels;
use colloquy_contracts::events::AllCompleteEvent;
use colloquy_contracts::requests::SendToAgentsRequest;
use colloquy_traits::{ChatOrchestrator, SurfaceRegistry};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::broadcast::broadcast;
use crate::router::{IpcRouter, decode};

pub fn register(
    router: &mut IpcRouter,
    orchestrator: Arc<dyn ChatOrchestrator>,
    surfaces: Arc<dyn SurfaceRegistry>,
) {
    router.register(
        channels::chat::SEND_TO_AGENTS,
        Arc::new(move |payload| {
            let orchestrator = orchestrator.clone();
            let surfaces = surfaces.clone();
            Box::pin(async move {
                let req: SendToAgentsRequest = decode(payload)?;
                if req.conversation_id.is_empty() {
                    bail!("conversationId is required and must be a non-empty string");
                }
                if req.user_message_id.is_empty() {
                    bail!("userMessageId is required and must be a non-empty string");
                }

                tokio::spawn(run_round(orchestrator, surfaces, req));
                Ok(Value::Null)
            })
        }),
    );
}

async fn run_round(
    orchestrator: Arc<dyn ChatOrchestrator>,
    surfaces: Arc<dyn SurfaceRegistry>,
    req: SendToAgentsRequest,
) {
    match orchestrator
        .process_user_message(&req.conversation_id, &req.user_message_id)
        .await
    {
        Ok(result) => {
            info!(
                conversation_id = %req.conversation_id,
                total = result.total_agents,
                successful = result.successful_agents,
                failed = result.failed_agents,
                duration_ms = result.duration_ms,
                "agent round finished"
            );
        }
        Err(err) => {
            error!(
                conversation_id = %req.conversation_id,
                error = %err,
                "agent round failed"
            );
        }
    }

    broadcast(
        surfaces.as_ref(),
        channels::chat::ALL_COMPLETE,
        &AllCompleteEvent::new(&req.conversation_id),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::RuntimeMode;
    use colloquy_models::ProcessingResult;
    use colloquy_traits::mock::{MockOrchestrator, MockSurface, MockSurfaceRegistry};
    use serde_json::json;
    use std::time::Duration;

    fn result() -> ProcessingResult {
        ProcessingResult {
            total_agents: 2,
            successful_agents: 2,
            failed_agents: 0,
            duration_ms: 12,
            errors: vec![],
        }
    }

    fn payload() -> Value {
        json!({ "conversationId": "conv-1", "userMessageId": "msg-1" })
    }

    async fn wait_for_broadcast(surface: &MockSurface) {
        for _ in 0..100 {
            if !surface.received_on(channels::chat::ALL_COMPLETE).is_empty() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("broadcast never arrived");
    }

    #[tokio::test]
    async fn dispatch_resolves_null_and_broadcasts_once_on_success() {
        let orchestrator = Arc::new(MockOrchestrator::succeeding(result()));
        let surface = MockSurface::new();
        let registry = Arc::new(MockSurfaceRegistry::new(vec![surface.clone()]));
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, orchestrator.clone(), registry);

        let out = router
            .invoke(channels::chat::SEND_TO_AGENTS, payload())
            .await
            .unwrap();
        assert_eq!(out, Value::Null);

        wait_for_broadcast(&surface).await;
        assert_eq!(
            surface.received_on(channels::chat::ALL_COMPLETE),
            vec![json!({ "conversationId": "conv-1" })]
        );
        assert_eq!(orchestrator.call_count(), 1);
        assert_eq!(
            orchestrator.last_args(),
            Some(("conv-1".to_string(), "msg-1".to_string()))
        );
    }

    #[tokio::test]
    async fn orchestration_failure_still_broadcasts_exactly_once() {
        let orchestrator = Arc::new(MockOrchestrator::failing("provider timed out"));
        let surface = MockSurface::new();
        let registry = Arc::new(MockSurfaceRegistry::new(vec![surface.clone()]));
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, orchestrator, registry);

        let out = router
            .invoke(channels::chat::SEND_TO_AGENTS, payload())
            .await
            .unwrap();
        assert_eq!(out, Value::Null);

        wait_for_broadcast(&surface).await;
        assert_eq!(
            surface.received_on(channels::chat::ALL_COMPLETE).len(),
            1
        );
    }

    #[tokio::test]
    async fn missing_conversation_id_rejects_before_dispatch() {
        let orchestrator = Arc::new(MockOrchestrator::succeeding(result()));
        let registry = Arc::new(MockSurfaceRegistry::new(vec![]));
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, orchestrator.clone(), registry);

        let result = router
            .invoke(
                channels::chat::SEND_TO_AGENTS,
                json!({ "conversationId": "", "userMessageId": "msg-1" }),
            )
            .await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("conversationId is required"));
        assert_eq!(orchestrator.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_user_message_id_rejects_before_dispatch() {
        let orchestrator = Arc::new(MockOrchestrator::succeeding(result()));
        let registry = Arc::new(MockSurfaceRegistry::new(vec![]));
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, orchestrator.clone(), registry);

        let result = router
            .invoke(
                channels::chat::SEND_TO_AGENTS,
                json!({ "conversationId": "conv-1" }),
            )
            .await;
        assert!(result.is_err());
        assert_eq!(orchestrator.call_count(), 0);
    }

    #[tokio::test]
    async fn broadcast_skips_destroyed_surfaces() {
        let orchestrator = Arc::new(MockOrchestrator::succeeding(result()));
        let live = MockSurface::new();
        let dead = MockSurface::new();
        dead.destroy();
        let registry = Arc::new(MockSurfaceRegistry::new(vec![live.clone(), dead.clone()]));
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, orchestrator, registry);

        router
            .invoke(channels::chat::SEND_TO_AGENTS, payload())
            .await
            .unwrap();

        wait_for_broadcast(&live).await;
        assert_eq!(dead.received_count(), 0);
    }
}
