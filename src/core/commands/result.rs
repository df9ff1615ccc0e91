//! Command execution result type.

use crate::models::OutputLine;

/// Follow-up work the host performs after a command returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Reset the transcript to the banner.
    Clear,
    /// Probe a URL (already normalized).
    Curl(String),
    /// Probe a host, as typed.
    Ping(String),
    /// End the session.
    Exit,
}

/// Result of executing a command.
///
/// Commands can produce output and optionally request a follow-up action.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    pub action: Option<Action>,
}

impl CommandResult {
    /// Create a result with just output, no action.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            action: None,
        }
    }

    /// Create a result that only requests an action.
    pub fn action(action: Action) -> Self {
        Self {
            output: vec![],
            action: Some(action),
        }
    }

    /// Create an empty result (no output, no action).
    pub fn empty() -> Self {
        Self::output(vec![])
    }
}
