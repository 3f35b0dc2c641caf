//! The closed set of error codes surfaced to renderer callers.

// File storage
pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const NO_SPACE: &str = "NO_SPACE";
pub const IS_DIRECTORY: &str = "IS_DIRECTORY";
pub const INVALID_JSON: &str = "INVALID_JSON";
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const SCHEMA_VERSION_MISMATCH: &str = "SCHEMA_VERSION_MISMATCH";
pub const FILE_STORAGE_ERROR: &str = "FILE_STORAGE_ERROR";

// Configuration
pub const DUPLICATE_CONFIG_NAME: &str = "DUPLICATE_CONFIG_NAME";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const INVALID_CONFIG_DATA: &str = "INVALID_CONFIG_DATA";
pub const CONFIG_OPERATION_FAILED: &str = "CONFIG_OPERATION_FAILED";

// Heuristic buckets for foreign errors
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const SERVICE_ERROR: &str = "SERVICE_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
