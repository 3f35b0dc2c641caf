//! Settings channel handlers.

use colloquy_contracts::channels;
use colloquy_contracts::requests::{SaveSettingsRequest, SetDebugLoggingRequest};
use colloquy_models::SettingsPatch;
use colloquy_traits::SettingsRepository;
use std::sync::Arc;
use tracing::info;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, repo: Arc<dyn SettingsRepository>) {
    {
        let repo = repo.clone();
        router.handle(channels::settings::LOAD, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move { repo.load().await }
        });
    }

    {
        let repo = repo.clone();
        router.handle_empty(channels::settings::SAVE, move |req: SaveSettingsRequest| {
            let repo = repo.clone();
            async move { repo.save(req.settings).await }
        });
    }

    {
        // Reset is save-then-load: persist the defaults first, then return
        // what storage now holds. A failing save must surface before any
        // load is attempted.
        let repo = repo.clone();
        router.handle(channels::settings::RESET, move |_: EmptyRequest| {
            let repo = repo.clone();
            async move {
                repo.save(SettingsPatch::default()).await?;
                repo.load().await
            }
        });
    }

    router.handle_empty(
        channels::settings::SET_DEBUG_LOGGING,
        move |req: SetDebugLoggingRequest| {
            let repo = repo.clone();
            async move {
                repo.set_debug_logging(req.enabled).await?;
                info!(enabled = req.enabled, "debug logging toggled");
                Ok(())
            }
        },
    );
}
