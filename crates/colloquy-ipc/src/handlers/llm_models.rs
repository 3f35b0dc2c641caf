//! LLM model listing handlers.
//!
//! Only load is registered; `llmModels:save` and `llmModels:reset` are
//! reserved channels with no handler behind them.

use colloquy_contracts::channels;
use colloquy_traits::LlmModelCatalog;
use std::sync::Arc;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, catalog: Arc<dyn LlmModelCatalog>) {
    router.handle(channels::llm_models::LOAD, move |_: EmptyRequest| {
        let catalog = catalog.clone();
        async move { catalog.load().await }
    });
}
