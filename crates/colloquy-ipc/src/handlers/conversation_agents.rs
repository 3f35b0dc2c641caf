//! Conversation-agent membership handlers.
//!
//! Removal is the interesting one: it resolves the membership first, answers
//! `data: false` when nothing matches, and otherwise deletes the agent's
//! messages and the membership row inside one transaction, child rows first.

use anyhow::bail;
use colloquy_contracts::channels;
use colloquy_contracts::requests::{
    GetByConversationRequest, RemoveConversationAgentRequest, UpdateConversationAgentRequest,
};
use colloquy_models::AddConversationAgentInput;
use colloquy_traits::{ConversationAgentRepository, MessageRepository, TransactionProvider};
use std::sync::Arc;
use tracing::debug;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(
    router: &mut IpcRouter,
    repo: Arc<dyn ConversationAgentRepository>,
    messages: Arc<dyn MessageRepository>,
    transactions: Arc<dyn TransactionProvider>,
) {
    {
        let repo = repo.clone();
        router.handle(
            channels::conversation_agent::GET_BY_CONVERSATION,
            move |req: GetByConversationRequest| {
                let repo = repo.clone();
                async move {
                    if req.conversation_id.is_empty() {
                        bail!("Conversation ID is required");
                    }
                    repo.get_by_conversation(&req.conversation_id).await
                }
            },
        );
    }

    {
        let repo = repo.clone();
        router.handle(
            channels::conversation_agent::ADD,
            move |input: AddConversationAgentInput| {
                let repo = repo.clone();
                async move {
                    if input.conversation_id.is_empty() {
                        bail!("Conversation ID is required");
                    }
                    if input.agent_id.is_empty() {
                        bail!("Agent ID is required");
                    }
                    repo.add(input).await
                }
            },
        );
    }

    {
        let repo = repo.clone();
        router.handle(
            channels::conversation_agent::UPDATE,
            move |req: UpdateConversationAgentRequest| {
                let repo = repo.clone();
                async move {
                    if req.conversation_id.is_empty() {
                        bail!("Conversation ID is required");
                    }
                    if req.agent_id.is_empty() {
                        bail!("Agent ID is required");
                    }
                    repo.update(&req.conversation_id, &req.agent_id, req.updates)
                        .await
                }
            },
        );
    }

    {
        let repo = repo.clone();
        router.handle(
            channels::conversation_agent::REMOVE,
            move |req: RemoveConversationAgentRequest| {
                let repo = repo.clone();
                let messages = messages.clone();
                let transactions = transactions.clone();
                async move {
                    if req.conversation_id.is_empty() {
                        bail!("Conversation ID is required");
                    }
                    if req.agent_id.is_empty() {
                        bail!("Agent ID is required");
                    }

                    let records = repo.get_by_conversation(&req.conversation_id).await?;
                    let Some(record) = records.into_iter().find(|r| r.agent_id == req.agent_id)
                    else {
                        return Ok(false);
                    };

                    transactions
                        .transaction(Box::new(move || {
                            Box::pin(async move {
                                let removed = messages
                                    .delete_for_conversation_agent(
                                        &record.conversation_id,
                                        &record.agent_id,
                                    )
                                    .await?;
                                debug!(
                                    conversation_id = %record.conversation_id,
                                    agent_id = %record.agent_id,
                                    removed,
                                    "deleted agent messages"
                                );
                                repo.remove(&record.conversation_id, &record.agent_id).await
                            })
                        }))
                        .await?;
                    Ok(true)
                }
            },
        );
    }

    router.handle(channels::conversation_agent::LIST, move |_: EmptyRequest| {
        let repo = repo.clone();
        async move { repo.list().await }
    });
}
