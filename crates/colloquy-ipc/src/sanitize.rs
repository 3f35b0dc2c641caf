//! Scrubbing of host details from error payloads.
//!
//! Two rules, applied to messages, stacks, and string context values before
//! anything crosses to the renderer:
//!
//! * home-directory paths (`/Users/<name>/...`, `/home/<name>/...`) have the
//!   user segment replaced with a `<user-path>` token, keeping the rest of
//!   the path intact;
//! * other absolute system paths (`/usr`, `/opt`, `/var`, `/etc`, `/tmp`)
//!   collapse to their final segment.
//!
//! Both rules are idempotent, so re-sanitizing already-clean text is a no-op.

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Placeholder substituted for the `/Users/<name>` or `/home/<name>` prefix.
pub const USER_PATH_TOKEN: &str = "<user-path>";

static USER_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:/Users|/home)/[^/\s]+").expect("valid user path pattern"));

static SYSTEM_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:usr|opt|var|etc|tmp)(?:/[^/\s]+)+").expect("valid system path pattern")
});

/// Substrings (matched case-insensitively) that mark a context key as
/// sensitive. Matching keys are dropped from serialized context entirely.
const SENSITIVE_KEY_MARKERS: &[&str] = &["password", "secret", "token", "apikey", "key"];

/// Replace host filesystem paths in free-form text.
pub fn sanitize_message(message: &str) -> String {
    let scrubbed = USER_PATH.replace_all(message, USER_PATH_TOKEN);
    SYSTEM_PATH
        .replace_all(&scrubbed, |caps: &Captures| {
            let matched = &caps[0];
            matched.rsplit('/').next().unwrap_or(matched).to_string()
        })
        .into_owned()
}

fn is_sensitive_key(key: &str) -> bool {
    let lowered = key.to_ascii_lowercase();
    SENSITIVE_KEY_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Filter and scrub a structured error context.
///
/// Keys containing a sensitive marker are removed at every nesting level,
/// string values go through [`sanitize_message`], nested objects recurse, and
/// everything else passes through unchanged.
pub fn sanitize_context(context: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in context {
        if is_sensitive_key(key) {
            continue;
        }
        let cleaned = match value {
            Value::String(text) => Value::String(sanitize_message(text)),
            Value::Object(nested) => Value::Object(sanitize_context(nested)),
            other => other.clone(),
        };
        out.insert(key.clone(), cleaned);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_paths_keep_their_tail() {
        assert_eq!(
            sanitize_message("ENOENT: /Users/alice/Library/app/settings.json missing"),
            "ENOENT: <user-path>/Library/app/settings.json missing"
        );
        assert_eq!(
            sanitize_message("read /home/bob/.config/colloquy/roles.json failed"),
            "read <user-path>/.config/colloquy/roles.json failed"
        );
    }

    #[test]
    fn system_paths_collapse_to_basename() {
        assert_eq!(
            sanitize_message("cannot open /var/log/colloquy/main.log"),
            "cannot open main.log"
        );
        assert_eq!(sanitize_message("wrote /tmp/export.json"), "wrote export.json");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let input = "copy /Users/alice/a.json to /Users/alice/b.json via /tmp/stage.json";
        assert_eq!(
            sanitize_message(input),
            "copy <user-path>/a.json to <user-path>/b.json via stage.json"
        );
    }

    #[test]
    fn sanitization_is_idempotent() {
        let once = sanitize_message("failed at /home/carol/data/store.db and /etc/hosts");
        assert_eq!(sanitize_message(&once), once);
    }

    #[test]
    fn text_without_paths_is_untouched() {
        let input = "validation failed: name is required";
        assert_eq!(sanitize_message(input), input);
    }

    #[test]
    fn sensitive_keys_are_dropped_case_insensitively() {
        let context = json!({
            "filePath": "/Users/dave/settings.json",
            "apiKey": "sk-123",
            "PASSWORD": "hunter2",
            "refreshToken": "abc",
            "operation": "save"
        });
        let Value::Object(map) = context else { unreachable!() };
        let cleaned = sanitize_context(&map);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned["filePath"], "<user-path>/settings.json");
        assert_eq!(cleaned["operation"], "save");
    }

    #[test]
    fn nested_objects_are_filtered_recursively() {
        let context = json!({
            "request": {
                "secretValue": "x",
                "path": "/opt/colloquy/models.json"
            },
            "attempts": [1, 2, 3]
        });
        let Value::Object(map) = context else { unreachable!() };
        let cleaned = sanitize_context(&map);
        assert_eq!(cleaned["request"], json!({ "path": "models.json" }));
        assert_eq!(cleaned["attempts"], json!([1, 2, 3]));
    }
}
