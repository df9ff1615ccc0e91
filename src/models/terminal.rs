//! Terminal-related data types for transcript rendering.

use std::sync::atomic::{AtomicU64, Ordering};

/// Text styling for listing entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Directory entries (cyan, bold)
    Directory,
    /// Regular file entries
    File,
}

/// Format for listing entries.
#[derive(Clone, Debug, PartialEq)]
pub enum ListFormat {
    /// Short format: name only
    Short,
    /// Long format: permissions, size, date, name
    Long {
        permissions: String,
        size: Option<u64>,
        /// Modification time in Unix seconds.
        modified: u64,
    },
}

/// A single rendered line of command output.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLine {
    /// Plain text output
    Text(String),
    /// Error message (red)
    Error(String),
    /// Success message (green)
    Success(String),
    /// Info message (yellow)
    Info(String),
    /// ASCII art (with glow effect)
    Ascii(String),
    /// Empty line
    Empty,
    /// Directory listing entry (ls, ls -l)
    ListEntry {
        name: String,
        style: TextStyle,
        format: ListFormat,
    },
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::Success(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    pub fn ascii(s: impl Into<String>) -> Self {
        Self::Ascii(s.into())
    }

    pub fn empty() -> Self {
        Self::Empty
    }

    /// Splits multi-line text into one `Text` line per source line.
    pub fn text_block(s: &str) -> Vec<Self> {
        s.lines().map(Self::text).collect()
    }

    /// Create a directory listing entry (short format)
    pub fn dir_entry(name: impl Into<String>) -> Self {
        Self::ListEntry {
            name: name.into(),
            style: TextStyle::Directory,
            format: ListFormat::Short,
        }
    }

    /// Create a file listing entry (short format)
    pub fn file_entry(name: impl Into<String>) -> Self {
        Self::ListEntry {
            name: name.into(),
            style: TextStyle::File,
            format: ListFormat::Short,
        }
    }

    /// Create a long listing entry (ls -l)
    pub fn long_entry(node: &super::FsNode) -> Self {
        let style = if node.is_directory() {
            TextStyle::Directory
        } else {
            TextStyle::File
        };
        Self::ListEntry {
            name: node.name.clone(),
            style,
            format: ListFormat::Long {
                permissions: super::DisplayPermissions::for_node(node).to_string(),
                size: node.size(),
                modified: node.modified_at / 1000,
            },
        }
    }

    /// Returns the plain text of the line, as it would be copied out of the terminal.
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Error(s) | Self::Success(s) | Self::Info(s) | Self::Ascii(s) => s,
            Self::ListEntry { name, .. } => name,
            Self::Empty => "",
        }
    }
}

// ============================================================================
// Transcript
// ============================================================================

static ENTRY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable identifier of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn next() -> Self {
        Self(ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The submitted line shown above an entry's output.
#[derive(Clone, Debug, PartialEq)]
pub struct EchoedInput {
    /// Prompt at submission time (`user@host:/cwd`).
    pub prompt: String,
    pub line: String,
}

/// One command/output pair in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub id: EntryId,
    /// Bumped whenever the output is replaced, so keyed views re-render.
    pub revision: u32,
    pub input: Option<EchoedInput>,
    pub output: Vec<OutputLine>,
}

impl TranscriptEntry {
    pub fn new(input: Option<EchoedInput>, output: Vec<OutputLine>) -> Self {
        Self {
            id: EntryId::next(),
            revision: 0,
            input,
            output,
        }
    }

    /// Key for keyed list rendering.
    pub fn render_key(&self) -> (EntryId, u32) {
        (self.id, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(OutputLine::text("hello"), OutputLine::Text("hello".to_string()));
        assert_eq!(OutputLine::error("error"), OutputLine::Error("error".to_string()));
        assert_eq!(OutputLine::success("ok"), OutputLine::Success("ok".to_string()));
        assert_eq!(OutputLine::info("info"), OutputLine::Info("info".to_string()));
        assert_eq!(OutputLine::ascii("art"), OutputLine::Ascii("art".to_string()));
    }

    #[test]
    fn test_text_block_splits_lines() {
        let lines = OutputLine::text_block("one\ntwo\n\nfour");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], OutputLine::text("two"));
        assert_eq!(lines[2], OutputLine::text(""));
    }

    #[test]
    fn test_dir_entry() {
        match OutputLine::dir_entry("projects") {
            OutputLine::ListEntry { name, style, format } => {
                assert_eq!(name, "projects");
                assert_eq!(style, TextStyle::Directory);
                assert_eq!(format, ListFormat::Short);
            }
            other => panic!("Expected ListEntry variant, got {other:?}"),
        }
    }

    #[test]
    fn test_long_entry_for_file() {
        let node = super::super::FsNode::file("notes.txt", "hello", 5_000);
        match OutputLine::long_entry(&node) {
            OutputLine::ListEntry {
                style,
                format: ListFormat::Long { permissions, size, modified },
                ..
            } => {
                assert_eq!(style, TextStyle::File);
                assert_eq!(permissions, "-rw-");
                assert_eq!(size, Some(5));
                assert_eq!(modified, 5);
            }
            other => panic!("Expected long ListEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = TranscriptEntry::new(None, vec![]);
        let b = TranscriptEntry::new(None, vec![]);
        assert_ne!(a.id, b.id);
        assert!(a.id < b.id);
    }
}
