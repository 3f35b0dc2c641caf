//! Message channel handlers.
//!
//! `messages:delete` is reserved: the channel constant exists for the bridge
//! surface, but no handler is registered, so invoking it rejects.

use anyhow::bail;
use colloquy_contracts::channels;
use colloquy_contracts::requests::{ListMessagesRequest, UpdateMessageInclusionRequest};
use colloquy_models::CreateMessageInput;
use colloquy_traits::MessageRepository;
use std::sync::Arc;

use crate::router::IpcRouter;

pub fn register(router: &mut IpcRouter, repo: Arc<dyn MessageRepository>) {
    {
        let repo = repo.clone();
        router.handle(channels::messages::LIST, move |req: ListMessagesRequest| {
            let repo = repo.clone();
            async move {
                if req.conversation_id.is_empty() {
                    bail!("Conversation ID is required");
                }
                repo.list(&req.conversation_id).await
            }
        });
    }

    {
        let repo = repo.clone();
        router.handle(
            channels::messages::CREATE,
            move |input: CreateMessageInput| {
                let repo = repo.clone();
                async move {
                    if input.conversation_id.is_empty() {
                        bail!("Conversation ID is required");
                    }
                    repo.create(input).await
                }
            },
        );
    }

    router.handle(
        channels::messages::UPDATE_INCLUSION,
        move |req: UpdateMessageInclusionRequest| {
            let repo = repo.clone();
            async move {
                if req.message_id.is_empty() {
                    bail!("Message ID is required");
                }
                repo.update_inclusion(&req.message_id, req.included_in_context)
                    .await
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::RuntimeMode;
    use colloquy_contracts::codes;
    use colloquy_traits::mock::InMemoryMessageRepository;
    use serde_json::json;

    fn setup() -> IpcRouter {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, Arc::new(InMemoryMessageRepository::default()));
        router
    }

    #[tokio::test]
    async fn create_defaults_inclusion_to_true() {
        let router = setup();
        let out = router
            .invoke(
                channels::messages::CREATE,
                json!({ "conversationId": "conv-1", "role": "user", "content": "hello" }),
            )
            .await
            .unwrap();
        assert_eq!(out["data"]["includedInContext"], json!(true));
        assert_eq!(out["data"]["role"], json!("user"));
    }

    #[tokio::test]
    async fn list_filters_by_conversation() {
        let router = setup();
        for conv in ["conv-1", "conv-1", "conv-2"] {
            router
                .invoke(
                    channels::messages::CREATE,
                    json!({ "conversationId": conv, "role": "user", "content": "hi" }),
                )
                .await
                .unwrap();
        }
        let out = router
            .invoke(channels::messages::LIST, json!({ "conversationId": "conv-1" }))
            .await
            .unwrap();
        assert_eq!(out["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_inclusion_flips_the_flag() {
        let router = setup();
        let created = router
            .invoke(
                channels::messages::CREATE,
                json!({ "conversationId": "conv-1", "role": "user", "content": "hi" }),
            )
            .await
            .unwrap();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let out = router
            .invoke(
                channels::messages::UPDATE_INCLUSION,
                json!({ "messageId": id, "includedInContext": false }),
            )
            .await
            .unwrap();
        assert_eq!(out["data"]["includedInContext"], json!(false));
    }

    #[tokio::test]
    async fn update_inclusion_rejects_empty_id() {
        let router = setup();
        let out = router
            .invoke(
                channels::messages::UPDATE_INCLUSION,
                json!({ "messageId": "", "includedInContext": false }),
            )
            .await
            .unwrap();
        assert_eq!(out["error"]["code"], json!(codes::VALIDATION_ERROR));
    }

    #[tokio::test]
    async fn delete_channel_stays_unregistered() {
        let router = setup();
        let result = router
            .invoke(channels::messages::DELETE, json!({ "id": "m-1" }))
            .await;
        assert!(result.is_err());
    }
}
