//! Execution mode flag.

const MODE_ENV_VAR: &str = "COLLOQUY_ENV";

/// Development or production execution mode.
///
/// The only behavior gated on this is stack-trace inclusion in serialized
/// errors; production responses never carry stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    /// Read the mode from the environment, defaulting to production.
    pub fn from_env() -> Self {
        match std::env::var(MODE_ENV_VAR) {
            Ok(value) if value.eq_ignore_ascii_case("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}
