//! Personality trait definition handlers.

use colloquy_contracts::channels;
use colloquy_traits::PersonalityDefinitionsProvider;
use std::sync::Arc;

use crate::router::{EmptyRequest, IpcRouter};

pub fn register(router: &mut IpcRouter, provider: Arc<dyn PersonalityDefinitionsProvider>) {
    router.handle(
        channels::personality::GET_DEFINITIONS,
        move |_: EmptyRequest| {
            let provider = provider.clone();
            async move { provider.get_definitions().await }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::RuntimeMode;
    use colloquy_traits::mock::StaticDefinitionsProvider;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn definitions_pass_through_as_data() {
        let provider = StaticDefinitionsProvider {
            definitions: json!({ "bigFive": { "openness": { "label": "Openness" } } }),
        };
        let mut router = IpcRouter::new(RuntimeMode::Production);
        register(&mut router, Arc::new(provider));

        let out = router
            .invoke(channels::personality::GET_DEFINITIONS, Value::Null)
            .await
            .unwrap();
        assert_eq!(out["success"], json!(true));
        assert_eq!(out["data"]["bigFive"]["openness"]["label"], json!("Openness"));
    }
}
