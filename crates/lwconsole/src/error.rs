//! Error taxonomy for command execution and registration.
//!
//! Exactly two kinds of failure ever reach the user: usage errors
//! (malformed arguments, rendered with the command's usage line) and
//! generic failures (rendered as `<kind>: <message>`). Both are terminal
//! for a single invocation and neither aborts the session.

use thiserror::Error;

/// Failure channel for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Malformed or missing arguments. Recoverable; the dispatcher renders
    /// the command's usage string alongside the optional message.
    #[error("invalid usage")]
    Usage { message: Option<String> },

    /// Any other failure inside a handler.
    #[error("{kind}: {message}")]
    Failure { kind: String, message: String },
}

impl CommandError {
    /// Usage error without a message.
    pub fn usage() -> Self {
        CommandError::Usage { message: None }
    }

    /// Usage error carrying a message shown before the usage line.
    pub fn usage_with(message: impl Into<String>) -> Self {
        CommandError::Usage {
            message: Some(message.into()),
        }
    }

    pub fn failure(kind: impl Into<String>, message: impl Into<String>) -> Self {
        CommandError::Failure {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::failure("IoError", err.to_string())
    }
}

impl From<std::num::ParseIntError> for CommandError {
    fn from(err: std::num::ParseIntError) -> Self {
        CommandError::failure("ParseError", err.to_string())
    }
}

/// Errors raised by [`crate::registry::CommandRegistry::add`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A command with the same (case-insensitive) name is already
    /// registered. The name field preserves the existing entry's casing.
    #[error("command '{0}' is already registered")]
    Duplicate(String),
}
