//! Channel router: the main-process dispatch table.
//!
//! One handler per channel, keyed by the constants in
//! [`colloquy_contracts::channels`]. The typed registration helpers
//! (`handle`, `handle_opt`, `handle_empty`) decode the payload, run the
//! handler, and fold both outcomes into the `{success, data?, error?}`
//! envelope, so domain handlers only ever return `anyhow::Result`. The chat
//! dispatcher registers through the raw [`IpcRouter::register`] path instead
//! because its failures must reject the invoke rather than resolve to an
//! error envelope.

use anyhow::{Result, anyhow};
use colloquy_contracts::IpcResponse;
use futures::future::BoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, warn};

use crate::mode::RuntimeMode;
use crate::serialize::serialize_error;

pub type HandlerFuture = BoxFuture<'static, Result<Value>>;
pub type Handler = Arc<dyn Fn(Value) -> HandlerFuture + Send + Sync>;

/// Payload type for operations that take no arguments. Decodes from `null`,
/// `{}`, or any object (extra fields are ignored).
#[derive(Debug, Default, serde::Deserialize)]
pub struct EmptyRequest {}

pub struct IpcRouter {
    mode: RuntimeMode,
    handlers: HashMap<&'static str, Handler>,
}

impl IpcRouter {
    pub fn new(mode: RuntimeMode) -> Self {
        Self {
            mode,
            handlers: HashMap::new(),
        }
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Register a raw handler. Re-registering a channel replaces the previous
    /// handler.
    pub fn register(&mut self, channel: &'static str, handler: Handler) {
        if self.handlers.insert(channel, handler).is_some() {
            warn!(channel, "replaced existing handler");
        }
    }

    pub fn is_registered(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    pub fn channels(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    /// Dispatch one invoke. An unregistered channel rejects the call; what a
    /// registered handler returns (envelope or raw value) passes through
    /// untouched.
    pub async fn invoke(&self, channel: &str, payload: Value) -> Result<Value> {
        let handler = self
            .handlers
            .get(channel)
            .cloned()
            .ok_or_else(|| anyhow!("No handler registered for channel '{channel}'"))?;
        handler(payload).await
    }

    /// Register a typed handler whose success always carries data.
    pub fn handle<Req, T, F, Fut>(&mut self, channel: &'static str, handler: F)
    where
        Req: DeserializeOwned + Send + 'static,
        T: Serialize + Send + 'static,
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.handle_opt(channel, move |req| {
            let fut = handler(req);
            async move { fut.await.map(Some) }
        });
    }

    /// Register a typed handler whose success may carry no data
    /// (`Ok(None)` serializes as `{ "success": true }`).
    pub fn handle_opt<Req, T, F, Fut>(&mut self, channel: &'static str, handler: F)
    where
        Req: DeserializeOwned + Send + 'static,
        T: Serialize + Send + 'static,
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<T>>> + Send + 'static,
    {
        let mode = self.mode;
        let handler = Arc::new(handler);
        self.register(
            channel,
            Arc::new(move |payload| {
                let handler = Arc::clone(&handler);
                Box::pin(async move {
                    let envelope = match decode::<Req>(payload) {
                        Ok(req) => match handler(req).await {
                            Ok(Some(data)) => encode_envelope(IpcResponse::ok(data), mode),
                            Ok(None) => encode_envelope(IpcResponse::<T>::ok_empty(), mode),
                            Err(err) => {
                                error!(channel, error = %err, "handler failed");
                                encode_envelope(
                                    IpcResponse::<T>::err(serialize_error(&err, mode)),
                                    mode,
                                )
                            }
                        },
                        Err(err) => {
                            warn!(channel, error = %err, "rejected malformed payload");
                            encode_envelope(IpcResponse::<T>::err(serialize_error(&err, mode)), mode)
                        }
                    };
                    Ok(envelope)
                })
            }),
        );
    }

    /// Register a typed handler for operations that return nothing.
    pub fn handle_empty<Req, F, Fut>(&mut self, channel: &'static str, handler: F)
    where
        Req: DeserializeOwned + Send + 'static,
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.handle_opt(channel, move |req| {
            let fut = handler(req);
            async move { fut.await.map(|()| None::<Value>) }
        });
    }
}

/// Decode an invoke payload. `null` stands in for "no arguments" so
/// no-payload invokes decode into [`EmptyRequest`].
pub(crate) fn decode<Req: DeserializeOwned>(payload: Value) -> Result<Req> {
    let payload = if payload.is_null() {
        Value::Object(Map::new())
    } else {
        payload
    };
    serde_json::from_value(payload).map_err(|err| anyhow!("Request validation failed: {err}"))
}

fn encode_envelope<T: Serialize>(envelope: IpcResponse<T>, mode: RuntimeMode) -> Value {
    match serde_json::to_value(&envelope) {
        Ok(value) => value,
        Err(err) => {
            error!(error = %err, "failed to encode response envelope");
            let fallback = serialize_error(&anyhow::Error::new(err), mode);
            serde_json::to_value(IpcResponse::<Value>::err(fallback))
                .unwrap_or_else(|_| json!({ "success": false }))
        }
    }
}
