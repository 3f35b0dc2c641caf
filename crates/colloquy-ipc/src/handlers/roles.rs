//! Role library channel handlers.

use colloquy_contracts::channels;
use colloquy_contracts::requests::SaveRolesRequest;
use colloquy_traits::RoleRepository;
use std::sync::Arc;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, repo: Arc<dyn RoleRepository>) {
    {
        let repo = repo.clone();
        router.handle_opt(channels::roles::LOAD, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move { repo.load().await }
        });
    }

    {
        let repo = repo.clone();
        router.handle_empty(channels::roles::SAVE, move |req: SaveRolesRequest| {
            let repo = repo.clone();
            async move { repo.save(req.roles).await }
        });
    }

    router.handle_empty(channels::roles::RESET, move |_: EmptyRequest| {
        let repo = repo.clone();
        async move { repo.reset().await }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::RuntimeMode;
    use colloquy_models::Role;
    use colloquy_traits::mock::InMemoryRoleRepository;
    use serde_json::{Value, json};

    fn setup() -> IpcRouter {
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, Arc::new(InMemoryRoleRepository::default()));
        router
    }

    #[tokio::test]
    async fn load_before_first_save_returns_no_data() {
        let router = setup();
        let out = router.invoke(channels::roles::LOAD, Value::Null).await.unwrap();
        assert_eq!(out, json!({ "success": true }));
    }

    #[tokio::test]
    async fn saved_roles_come_back_as_a_library() {
        let router = setup();
        let role = Role {
            id: "researcher".into(),
            name: "Researcher".into(),
            description: "Digs into sources".into(),
            system_prompt: "You research things.".into(),
        };
        let out = router
            .invoke(
                channels::roles::SAVE,
                json!({ "roles": [serde_json::to_value(&role).unwrap()] }),
            )
            .await
            .unwrap();
        assert_eq!(out, json!({ "success": true }));

        let out = router.invoke(channels::roles::LOAD, Value::Null).await.unwrap();
        assert_eq!(out["data"]["roles"][0]["id"], json!("researcher"));
    }

    #[tokio::test]
    async fn reset_clears_the_library() {
        let router = setup();
        router
            .invoke(channels::roles::SAVE, json!({ "roles": [] }))
            .await
            .unwrap();
        router.invoke(channels::roles::RESET, Value::Null).await.unwrap();
        let out = router.invoke(channels::roles::LOAD, Value::Null).await.unwrap();
        assert_eq!(out, json!({ "success": true }));
    }
}
