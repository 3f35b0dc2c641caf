//! Agent library channel handlers.

use colloquy_contracts::channels;
use colloquy_contracts::requests::SaveAgentsRequest;
use colloquy_traits::AgentRepository;
use std::sync::Arc;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, repo: Arc<dyn AgentRepository>) {
    {
        let repo = repo.clone();
        router.handle_opt(channels::agents::LOAD, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move { repo.load().await }
        });
    }

    {
        let repo = repo.clone();
        router.handle_empty(channels::agents::SAVE, move |req: SaveAgentsRequest| {
            let repo = repo.clone();
            async move { repo.save(req.agents).await }
        });
    }

    router.handle_empty(channels::agents::RESET, move |_: EmptyRequest| {
        let repo = repo.clone();
        async move { repo.reset().await }
    });
}
