//! Conversation channel handlers.

use anyhow::bail;
use colloquy_contracts::channels;
use colloquy_contracts::requests::{
    DeleteConversationRequest, GetConversationRequest, UpdateConversationRequest,
};
use colloquy_models::CreateConversationInput;
use colloquy_traits::ConversationRepository;
use std::sync::Arc;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, repo: Arc<dyn ConversationRepository>) {
    {
        let repo = repo.clone();
        router.handle(
            channels::conversations::CREATE,
            move |input: CreateConversationInput| {
                let repo = repo.clone();
                async move { repo.create(input).await }
            },
        );
    }

    {
        let repo = repo.clone();
        router.handle(channels::conversations::LIST, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move { repo.list().await }
        });
    }

    {
        let repo = repo.clone();
        router.handle_opt(
            channels::conversations::GET,
            move |req: GetConversationRequest| {
                let repo = repo.clone();
                async move {
                    if req.id.is_empty() {
                        bail!("Conversation ID is required");
                    }
                    repo.get(&req.id).await
                }
            },
        );
    }

    {
        let repo = repo.clone();
        router.handle(
            channels::conversations::UPDATE,
            move |req: UpdateConversationRequest| {
                let repo = repo.clone();
                async move {
                    if req.id.is_empty() {
                        bail!("Conversation ID is required");
                    }
                    repo.update(&req.id, req.updates).await
                }
            },
        );
    }

    router.handle_empty(
        channels::conversations::DELETE,
        move |req: DeleteConversationRequest| {
            let repo = repo.clone();
            async move {
                if req.id.is_empty() {
                    bail!("Conversation ID is required");
                }
                repo.delete(&req.id).await
            }
        },
    );
}
