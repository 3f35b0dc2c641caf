//! Chat orchestration seam.

use anyhow::Result;
use async_trait::async_trait;
use colloquy_models::ProcessingResult;

/// Runs one agent-processing round for a conversation.
///
/// The IPC dispatch handler never awaits this on the caller's path; it spawns
/// the call and observes settlement only to log counters and broadcast the
/// completion event. There is no cancellation hook; a dispatched round runs
/// to success or failure.
#[async_trait]
pub trait ChatOrchestrator: Send + Sync {
    async fn process_user_message(
        &self,
        conversation_id: &str,
        user_message_id: &str,
    ) -> Result<ProcessingResult>;
}
