//! Timestamp helpers.

/// Current time as Unix milliseconds. All model timestamps use this format.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
