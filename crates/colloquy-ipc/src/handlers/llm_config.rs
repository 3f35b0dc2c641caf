//! LLM configuration channel handlers.

use anyhow::bail;
use colloquy_contracts::channels;
use colloquy_contracts::requests::{
    DeleteLlmConfigRequest, ReadLlmConfigRequest, UpdateLlmConfigRequest,
};
use colloquy_models::LlmConfigInput;
use colloquy_traits::LlmConfigRepository;
use std::sync::Arc;
use tracing::info;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, repo: Arc<dyn LlmConfigRepository>) {
    {
        let repo = repo.clone();
        router.handle(channels::llm_config::CREATE, move |input: LlmConfigInput| {
            let repo = repo.clone();
            async move {
                if input.name.is_empty() || input.model.is_empty() {
                    bail!("Configuration input is required");
                }
                repo.create(input).await
            }
        });
    }

    {
        let repo = repo.clone();
        router.handle_opt(channels::llm_config::READ, move |req: ReadLlmConfigRequest| {
            let repo = repo.clone();
            async move {
                if req.id.is_empty() {
                    bail!("Configuration ID is required");
                }
                repo.read(&req.id).await
            }
        });
    }

    {
        let repo = repo.clone();
        router.handle(
            channels::llm_config::UPDATE,
            move |req: UpdateLlmConfigRequest| {
                let repo = repo.clone();
                async move {
                    if req.id.is_empty() {
                        bail!("Configuration ID is required");
                    }
                    repo.update(&req.id, req.updates).await
                }
            },
        );
    }

    {
        let repo = repo.clone();
        router.handle_empty(
            channels::llm_config::DELETE,
            move |req: DeleteLlmConfigRequest| {
                let repo = repo.clone();
                async move {
                    if req.id.is_empty() {
                        bail!("Configuration ID is required");
                    }
                    repo.delete(&req.id).await
                }
            },
        );
    }

    {
        let repo = repo.clone();
        router.handle(channels::llm_config::LIST, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move { repo.list().await }
        });
    }

    {
        let repo = repo.clone();
        router.handle_empty(channels::llm_config::INITIALIZE, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move {
                repo.initialize().await?;
                info!("llm configuration store initialized");
                Ok(())
            }
        });
    }

    router.handle_empty(channels::llm_config::REFRESH_CACHE, move |_: EmptyRequest| {
        let repo = repo.clone();
        async move { repo.refresh_cache().await }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::RuntimeMode;
    use colloquy_contracts::codes;
    use colloquy_models::LlmProvider;
    use colloquy_traits::mock::InMemoryLlmConfigRepository;
    use serde_json::{Value, json};

    fn setup() -> (IpcRouter, Arc<InMemoryLlmConfigRepository>) {
        let repo = Arc::new(InMemoryLlmConfigRepository::default());
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, repo.clone());
        (router, repo)
    }

    fn input(name: &str) -> Value {
        json!({
            "name": name,
            "provider": "anthropic",
            "model": "claude-sonnet-4-20250514"
        })
    }

    #[tokio::test]
    async fn create_read_round_trip() {
        let (router, _) = setup();
        let created = router
            .invoke(channels::llm_config::CREATE, input("Main"))
            .await
            .unwrap();
        assert_eq!(created["success"], json!(true));
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let read = router
            .invoke(channels::llm_config::READ, json!({ "id": id }))
            .await
            .unwrap();
        assert_eq!(read["data"]["name"], json!("Main"));
        assert!(
            serde_json::from_value::<LlmProvider>(read["data"]["provider"].clone()).is_ok()
        );
    }

    #[tokio::test]
    async fn duplicate_name_maps_to_its_config_code() {
        let (router, _) = setup();
        router
            .invoke(channels::llm_config::CREATE, input("Main"))
            .await
            .unwrap();
        let out = router
            .invoke(channels::llm_config::CREATE, input("Main"))
            .await
            .unwrap();
        assert_eq!(out["success"], json!(false));
        assert_eq!(out["error"]["code"], json!(codes::DUPLICATE_CONFIG_NAME));
        assert_eq!(out["error"]["context"]["name"], json!("Main"));
    }

    #[tokio::test]
    async fn read_missing_config_is_an_empty_success() {
        let (router, _) = setup();
        let out = router
            .invoke(channels::llm_config::READ, json!({ "id": "nope" }))
            .await
            .unwrap();
        assert_eq!(out, json!({ "success": true }));
    }

    #[tokio::test]
    async fn read_rejects_empty_id() {
        let (router, _) = setup();
        let out = router
            .invoke(channels::llm_config::READ, json!({ "id": "" }))
            .await
            .unwrap();
        assert_eq!(out["error"]["code"], json!(codes::VALIDATION_ERROR));
        assert_eq!(out["error"]["message"], json!("Configuration ID is required"));
    }

    #[tokio::test]
    async fn update_missing_config_maps_to_not_found() {
        let (router, _) = setup();
        let out = router
            .invoke(
                channels::llm_config::UPDATE,
                json!({ "id": "ghost", "updates": { "name": "New" } }),
            )
            .await
            .unwrap();
        assert_eq!(out["error"]["code"], json!(codes::CONFIG_NOT_FOUND));
    }

    #[tokio::test]
    async fn delete_then_list_is_empty() {
        let (router, _) = setup();
        let created = router
            .invoke(channels::llm_config::CREATE, input("Main"))
            .await
            .unwrap();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let out = router
            .invoke(channels::llm_config::DELETE, json!({ "id": id }))
            .await
            .unwrap();
        assert_eq!(out, json!({ "success": true }));

        let listed = router
            .invoke(channels::llm_config::LIST, Value::Null)
            .await
            .unwrap();
        assert_eq!(listed["data"], json!([]));
    }

    #[tokio::test]
    async fn initialize_and_refresh_report_empty_success() {
        let (router, repo) = setup();
        let out = router
            .invoke(channels::llm_config::INITIALIZE, Value::Null)
            .await
            .unwrap();
        assert_eq!(out, json!({ "success": true }));
        assert!(repo.is_initialized());

        router
            .invoke(channels::llm_config::REFRESH_CACHE, Value::Null)
            .await
            .unwrap();
        assert_eq!(repo.refresh_count(), 1);
    }
}
