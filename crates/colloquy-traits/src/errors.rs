//! Domain error types recognized by the IPC error classifier.
//!
//! Every variant declares its taxonomy code and structured context at the
//! type, so classification is a downcast plus a lookup rather than an
//! inspection cascade. Only foreign errors (I/O, arbitrary `anyhow` chains)
//! fall through to heuristics in the classifier.

use colloquy_contracts::codes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by the LLM configuration repository.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("A configuration named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Configuration {id} not found")]
    NotFound { id: String },

    #[error("Invalid configuration data: {reason}")]
    InvalidData { reason: String },

    #[error("Configuration operation '{operation}' failed: {reason}")]
    OperationFailed { operation: String, reason: String },
}

impl ConfigError {
    /// Wire-level error code for this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName { .. } => codes::DUPLICATE_CONFIG_NAME,
            Self::NotFound { .. } => codes::CONFIG_NOT_FOUND,
            Self::InvalidData { .. } => codes::INVALID_CONFIG_DATA,
            Self::OperationFailed { .. } => codes::CONFIG_OPERATION_FAILED,
        }
    }

    /// Structured context carried to the renderer (pre-sanitization).
    pub fn context(&self) -> Map<String, Value> {
        let mut ctx = Map::new();
        match self {
            Self::DuplicateName { name } => {
                ctx.insert("name".into(), Value::String(name.clone()));
            }
            Self::NotFound { id } => {
                ctx.insert("id".into(), Value::String(id.clone()));
            }
            Self::InvalidData { reason } => {
                ctx.insert("reason".into(), Value::String(reason.clone()));
            }
            Self::OperationFailed { operation, reason } => {
                ctx.insert("operation".into(), Value::String(operation.clone()));
                ctx.insert("reason".into(), Value::String(reason.clone()));
            }
        }
        ctx
    }
}

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors raised by file-backed repositories (settings and libraries).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {path}")]
    NotFound { operation: String, path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { operation: String, path: String },

    #[error("Invalid JSON in {path}: {reason}")]
    InvalidJson {
        operation: String,
        path: String,
        reason: String,
    },

    #[error("Validation failed during {operation}")]
    ValidationFailed {
        operation: String,
        field_errors: Vec<FieldError>,
    },

    #[error("Schema version mismatch in {path}: expected {expected}, found {found}")]
    SchemaVersionMismatch {
        path: String,
        expected: u32,
        found: u32,
    },

    #[error("Storage operation '{operation}' failed on {path}: {reason}")]
    Operation {
        operation: String,
        path: String,
        reason: String,
    },
}

impl StorageError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => codes::FILE_NOT_FOUND,
            Self::PermissionDenied { .. } => codes::PERMISSION_DENIED,
            Self::InvalidJson { .. } => codes::INVALID_JSON,
            Self::ValidationFailed { .. } => codes::VALIDATION_FAILED,
            Self::SchemaVersionMismatch { .. } => codes::SCHEMA_VERSION_MISMATCH,
            Self::Operation { .. } => codes::FILE_STORAGE_ERROR,
        }
    }

    pub fn context(&self) -> Map<String, Value> {
        let mut ctx = Map::new();
        match self {
            Self::NotFound { operation, path }
            | Self::PermissionDenied { operation, path }
            | Self::InvalidJson {
                operation, path, ..
            }
            | Self::Operation {
                operation, path, ..
            } => {
                ctx.insert("operation".into(), Value::String(operation.clone()));
                ctx.insert("filePath".into(), Value::String(path.clone()));
            }
            Self::ValidationFailed {
                operation,
                field_errors,
            } => {
                ctx.insert("operation".into(), Value::String(operation.clone()));
                ctx.insert(
                    "fieldErrors".into(),
                    serde_json::to_value(field_errors).unwrap_or(Value::Null),
                );
            }
            Self::SchemaVersionMismatch {
                path,
                expected,
                found,
            } => {
                ctx.insert("filePath".into(), Value::String(path.clone()));
                ctx.insert("expected".into(), Value::from(*expected));
                ctx.insert("found".into(), Value::from(*found));
            }
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_codes() {
        assert_eq!(
            ConfigError::DuplicateName { name: "a".into() }.code(),
            codes::DUPLICATE_CONFIG_NAME
        );
        assert_eq!(
            ConfigError::NotFound { id: "x".into() }.code(),
            codes::CONFIG_NOT_FOUND
        );
    }

    #[test]
    fn storage_error_context_carries_operation_and_path() {
        let err = StorageError::NotFound {
            operation: "load".into(),
            path: "/tmp/settings.json".into(),
        };
        let ctx = err.context();
        assert_eq!(ctx["operation"], "load");
        assert_eq!(ctx["filePath"], "/tmp/settings.json");
    }

    #[test]
    fn validation_context_carries_field_errors() {
        let err = StorageError::ValidationFailed {
            operation: "save".into(),
            field_errors: vec![FieldError {
                field: "theme".into(),
                message: "unknown theme".into(),
            }],
        };
        let ctx = err.context();
        assert_eq!(ctx["fieldErrors"][0]["field"], "theme");
    }
}
