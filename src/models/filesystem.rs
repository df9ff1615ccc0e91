use std::fmt;
use std::sync::Arc;

// =============================================================================
// Filesystem Node
// =============================================================================

/// Payload of a filesystem node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    File {
        content: String,
    },
    /// Children in insertion order. Shared between snapshots until modified.
    Directory {
        children: Vec<Arc<FsNode>>,
    },
}

/// A file or directory in the in-memory filesystem.
///
/// Nodes are immutable once placed in a snapshot; edits go through
/// [`crate::core::VirtualFs`], which clones the path it touches.
#[derive(Clone, Debug, PartialEq)]
pub struct FsNode {
    /// Unique among siblings.
    pub name: String,
    pub kind: NodeKind,
    /// Unix milliseconds.
    pub created_at: u64,
    /// Unix milliseconds, refreshed on content writes.
    pub modified_at: u64,
}

impl FsNode {
    pub fn file(name: impl Into<String>, content: impl Into<String>, now: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
            created_at: now,
            modified_at: now,
        }
    }

    pub fn directory(name: impl Into<String>, now: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
            created_at: now,
            modified_at: now,
        }
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Children in insertion order, `None` for files.
    pub fn children(&self) -> Option<&[Arc<FsNode>]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn child(&self, name: &str) -> Option<&Arc<FsNode>> {
        self.children()?.iter().find(|c| c.name == name)
    }

    /// Content length in bytes; directories have no size.
    pub fn size(&self) -> Option<u64> {
        self.content().map(|c| c.len() as u64)
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Arc<FsNode>>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }
}

// =============================================================================
// Display Permissions
// =============================================================================

/// Unix-style permission column for `ls -l`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayPermissions {
    pub is_dir: bool,
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl DisplayPermissions {
    /// Session files are always readable and writable; directories are traversable.
    pub fn for_node(node: &FsNode) -> Self {
        let is_dir = node.is_directory();
        Self {
            is_dir,
            read: true,
            write: true,
            execute: is_dir,
        }
    }
}

impl fmt::Display for DisplayPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            if self.is_dir { 'd' } else { '-' },
            if self.read { 'r' } else { '-' },
            if self.write { 'w' } else { '-' },
            if self.execute { 'x' } else { '-' },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_node() {
        let node = FsNode::file("a.txt", "abc", 10);
        assert!(node.is_file());
        assert_eq!(node.content(), Some("abc"));
        assert_eq!(node.size(), Some(3));
        assert!(node.children().is_none());
    }

    #[test]
    fn test_directory_node() {
        let node = FsNode::directory("docs", 10);
        assert!(node.is_directory());
        assert_eq!(node.content(), None);
        assert_eq!(node.size(), None);
        assert_eq!(node.children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_display_permissions() {
        let dir = FsNode::directory("d", 0);
        let file = FsNode::file("f", "", 0);
        assert_eq!(DisplayPermissions::for_node(&dir).to_string(), "drwx");
        assert_eq!(DisplayPermissions::for_node(&file).to_string(), "-rw-");
    }
}
