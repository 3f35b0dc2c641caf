//! The uniform response envelope and its error payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Flat, renderer-safe error shape used as the wire format for all failures.
///
/// `message` and `code` are always present. `stack` appears only in
/// development builds, `context` only when the originating error type carried
/// structured context. Messages, stacks, and context strings have host
/// filesystem paths sanitized before they reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SerializableError {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "Record<string, unknown> | null")]
    pub context: Option<Map<String, Value>>,
}

impl SerializableError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            stack: None,
            context: None,
        }
    }
}

/// The `{success, data?, error?}` wrapper around every invoke result.
///
/// Exactly one of `data`/`error` is populated relative to `success`; the
/// no-data success case (`data: None`, `success: true`) is used by operations
/// that conceptually return nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct IpcResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SerializableError>,
}

impl<T> IpcResponse<T> {
    /// A successful response carrying a value.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A successful response with no value (load/reset style operations).
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// A failed response carrying a serialized error.
    pub fn err(error: SerializableError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error_are_mutually_exclusive() {
        let ok = IpcResponse::ok(42u32);
        assert!(ok.success);
        assert!(ok.data.is_some());
        assert!(ok.error.is_none());

        let err = IpcResponse::<u32>::err(SerializableError::new("boom", "UNKNOWN_ERROR"));
        assert!(!err.success);
        assert!(err.data.is_none());
        assert!(err.error.is_some());

        let empty = IpcResponse::<u32>::ok_empty();
        assert!(empty.success);
        assert!(empty.data.is_none());
        assert!(empty.error.is_none());
    }

    #[test]
    fn empty_success_serializes_without_optional_fields() {
        let json = serde_json::to_value(IpcResponse::<u32>::ok_empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn error_serializes_without_stack_or_context_when_absent() {
        let json =
            serde_json::to_value(IpcResponse::<u32>::err(SerializableError::new("boom", "X")))
                .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": { "message": "boom", "code": "X" }
            })
        );
    }

    #[test]
    fn envelope_round_trips() {
        let json = serde_json::json!({ "success": true, "data": "value" });
        let resp: IpcResponse<String> = serde_json::from_value(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.as_deref(), Some("value"));
    }
}
