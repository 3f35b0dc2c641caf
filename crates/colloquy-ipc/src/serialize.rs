//! Error classification and the envelope builders.
//!
//! [`serialize_error`] is the single funnel every handler failure goes
//! through. Classification prefers the typed domain errors (downcast, read
//! the code and context off the variant), then raw I/O errors by OS error
//! code, then falls back to keyword heuristics over the rendered message.
//! Whatever the source, the output is flat and sanitized.

use anyhow::Error;
use colloquy_contracts::{IpcResponse, SerializableError, codes};
use colloquy_traits::{ConfigError, StorageError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;

use crate::mode::RuntimeMode;
use crate::sanitize::{sanitize_context, sanitize_message};

/// Substituted when an error renders to an empty message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

// Raw OS error codes recognized even when std maps them to ErrorKind::Other.
const ENOENT: i32 = 2;
const EPERM: i32 = 1;
const EACCES: i32 = 13;
const EISDIR: i32 = 21;
const ENOSPC: i32 = 28;

/// Convert any handler failure into the renderer-safe wire shape.
///
/// The stack field carries the sanitized debug rendering of the error chain
/// and only in development mode; production responses never include it.
pub fn serialize_error(error: &Error, mode: RuntimeMode) -> SerializableError {
    let (code, context) = classify(error);

    let rendered = error.to_string();
    let message = if rendered.is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        sanitize_message(&rendered)
    };

    let stack = mode
        .is_development()
        .then(|| sanitize_message(&format!("{error:?}")));

    SerializableError {
        message,
        code: code.to_string(),
        stack,
        context,
    }
}

fn classify(error: &Error) -> (&'static str, Option<Map<String, Value>>) {
    if let Some(config) = error.downcast_ref::<ConfigError>() {
        return (config.code(), Some(sanitize_context(&config.context())));
    }
    if let Some(storage) = error.downcast_ref::<StorageError>() {
        return (storage.code(), Some(sanitize_context(&storage.context())));
    }
    if let Some(io) = error.downcast_ref::<std::io::Error>()
        && let Some(code) = classify_io(io)
    {
        return (code, None);
    }
    (classify_message(&error.to_string()), None)
}

/// Map an I/O error to a storage code, or `None` to defer to the message
/// heuristics. Raw OS codes take precedence over `ErrorKind` because several
/// of them (ENOSPC, EISDIR) have no stable kind across platforms.
fn classify_io(error: &std::io::Error) -> Option<&'static str> {
    match error.raw_os_error() {
        Some(ENOENT) => Some(codes::FILE_NOT_FOUND),
        Some(EACCES) | Some(EPERM) => Some(codes::PERMISSION_DENIED),
        Some(ENOSPC) => Some(codes::NO_SPACE),
        Some(EISDIR) => Some(codes::IS_DIRECTORY),
        _ => match error.kind() {
            ErrorKind::NotFound => Some(codes::FILE_NOT_FOUND),
            ErrorKind::PermissionDenied => Some(codes::PERMISSION_DENIED),
            _ => None,
        },
    }
}

fn classify_message(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    if lowered.contains("validation") || lowered.contains("required") {
        codes::VALIDATION_ERROR
    } else if lowered.contains("service") || lowered.contains("operation") {
        codes::SERVICE_ERROR
    } else if lowered.contains("storage") {
        codes::STORAGE_ERROR
    } else {
        codes::UNKNOWN_ERROR
    }
}

/// Wrap a value in a successful envelope.
pub fn success_response<T: Serialize>(data: T) -> IpcResponse<T> {
    IpcResponse::ok(data)
}

/// Wrap a failure in an error envelope.
pub fn error_response<T>(error: &Error, mode: RuntimeMode) -> IpcResponse<T> {
    IpcResponse::err(serialize_error(error, mode))
}
