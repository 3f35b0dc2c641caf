//! Personality library channel handlers.

use colloquy_contracts::channels;
use colloquy_contracts::requests::SavePersonalitiesRequest;
use colloquy_traits::PersonalityRepository;
use std::sync::Arc;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, repo: Arc<dyn PersonalityRepository>) {
    {
        let repo = repo.clone();
        router.handle_opt(channels::personalities::LOAD, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move { repo.load().await }
        });
    }

    {
        let repo = repo.clone();
        router.handle_empty(
            channels::personalities::SAVE,
            move |req: SavePersonalitiesRequest| {
                let repo = repo.clone();
                async move { repo.save(req.personalities).await }
            },
        );
    }

    router.handle_empty(channels::personalities::RESET, move |_: EmptyRequest| {
        let repo = repo.clone();
        async move { repo.reset().await }
    });
}
