//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`CommandError`] - Failures of terminal commands, rendered as transcript lines
//! - [`FetchError`] - Network/fetch-related errors for the probe commands
//! - [`PlayerError`] - Playlist selection errors

use thiserror::Error;

/// Terminal command failures. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),

    #[error("cd: no such file or directory: {0}")]
    NoSuchDirectory(String),

    #[error("cd: not a directory: {0}")]
    NotADirectory(String),

    #[error("ls: cannot access '{0}': No such file or directory")]
    CannotAccess(String),

    #[error("cat: {0}: No such file")]
    NoSuchFile(String),

    #[error("{verb}: cannot create '{path}': No such file or directory")]
    MissingParent { verb: &'static str, path: String },

    #[error("echo: {0}: Is a directory")]
    RedirectToDirectory(String),

    #[error("rm: cannot remove '{0}': No such file or directory")]
    CannotRemove(String),

    #[error("rm: cannot remove '{0}': Is a directory (use -r)")]
    IsADirectory(String),

    #[error("rm: refusing to remove '/'")]
    RemoveRoot,

    #[error("{verb}: {source}")]
    Player {
        verb: &'static str,
        #[source]
        source: PlayerError,
    },
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Playlist selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("playlist is empty")]
    EmptyPlaylist,
    #[error("no track numbered {0}")]
    OutOfRange(usize),
    #[error("no track matching '{0}'")]
    NoMatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::NoSuchFile("x".into()).to_string(),
            "cat: x: No such file"
        );
        assert_eq!(
            CommandError::MissingOperand("mkdir").to_string(),
            "mkdir: missing operand"
        );
        assert_eq!(
            CommandError::Player {
                verb: "play",
                source: PlayerError::OutOfRange(42),
            }
            .to_string(),
            "play: no track numbered 42"
        );
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            FetchError::NetworkError("TypeError".into()).to_string(),
            "Network error: TypeError"
        );
    }
}
