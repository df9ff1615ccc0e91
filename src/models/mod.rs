//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FsNode`], [`NodeKind`] - In-memory filesystem nodes
//! - [`OutputLine`], [`TranscriptEntry`] - Terminal transcript types
//! - [`Route`] - Hash-based screen navigation
//! - [`Song`] - Playlist entries

mod filesystem;
mod route;
mod song;
mod terminal;

pub use filesystem::{DisplayPermissions, FsNode, NodeKind};
pub use route::Route;
pub use song::Song;
pub use terminal::{EchoedInput, EntryId, ListFormat, OutputLine, TextStyle, TranscriptEntry};
