use std::sync::Arc;

use crate::config::filesystem::{HOME_DIR, SEED_DIRECTORIES, SEED_FILES};
use crate::models::{FsNode, NodeKind};

/// In-memory filesystem snapshot for one terminal session.
///
/// Every edit returns a new snapshot. Only the nodes on the path from the
/// root to the edited node are cloned; untouched subtrees stay shared
/// through `Arc`, so old snapshots remain valid and cheap to keep.
///
/// # Path Convention
///
/// - Absolute, slash-separated: `"/"`, `"/home"`, `"/home/readme.txt"`
/// - Paths handed to the operations are expected to be normalized
///   (see [`VirtualFs::resolve`])
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualFs {
    root: Arc<FsNode>,
}

impl VirtualFs {
    /// Create a filesystem with nothing but the root directory.
    pub fn empty(now: u64) -> Self {
        Self {
            root: Arc::new(FsNode::directory("", now)),
        }
    }

    /// Create the session filesystem with its seed directories and files.
    pub fn seeded(now: u64) -> Self {
        let mut fs = Self::empty(now);
        for dir in SEED_DIRECTORIES {
            if let Some((parent, name)) = Self::split_parent(dir) {
                fs = fs.create_directory(&parent, &name, now);
            }
        }
        for (path, content) in SEED_FILES {
            if let Some((parent, name)) = Self::split_parent(path) {
                fs = fs.create_file(&parent, &name, content, now);
            }
        }
        fs
    }

    // =========================================================================
    // Path resolution
    // =========================================================================

    /// Resolve `target` against the directory `base`.
    ///
    /// - Absolute targets ignore `base`
    /// - `~` and `~/...` are relative to the home directory
    /// - `.` and empty segments are dropped, `..` pops one segment
    /// - Popping past the root stays at the root
    pub fn resolve(base: &str, target: &str) -> String {
        let target = target.trim();
        let combined = if target == "~" {
            HOME_DIR.to_string()
        } else if let Some(rest) = target.strip_prefix("~/") {
            format!("{}/{}", HOME_DIR, rest)
        } else if target.starts_with('/') {
            target.to_string()
        } else {
            format!("{}/{}", base, target)
        };

        Self::normalize_path(&combined)
    }

    /// Normalize a path by resolving `.` and `..` components.
    ///
    /// Always returns an absolute path without a trailing slash.
    pub fn normalize_path(path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/').filter(|s| !s.is_empty()) {
            match part {
                ".." => {
                    parts.pop();
                }
                "." => {}
                _ => parts.push(part),
            }
        }

        format!("/{}", parts.join("/"))
    }

    /// Split a normalized absolute path into `(parent, leaf)`.
    ///
    /// Returns `None` for the root, which has no leaf.
    pub fn split_parent(path: &str) -> Option<(String, String)> {
        let normalized = Self::normalize_path(path);
        let (parent, leaf) = normalized.rsplit_once('/')?;
        if leaf.is_empty() {
            return None;
        }
        let parent = if parent.is_empty() { "/" } else { parent };
        Some((parent.to_string(), leaf.to_string()))
    }

    /// Whether `path` equals `ancestor` or lies below it.
    pub fn is_within(path: &str, ancestor: &str) -> bool {
        if ancestor == "/" {
            return true;
        }
        path == ancestor
            || path
                .strip_prefix(ancestor)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a node by absolute path.
    pub fn lookup(&self, path: &str) -> Option<&FsNode> {
        let mut current: &FsNode = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Children of a directory in insertion order.
    pub fn list_children(&self, path: &str) -> Option<&[Arc<FsNode>]> {
        self.lookup(path)?.children()
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(FsNode::is_directory)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(FsNode::is_file)
    }

    // =========================================================================
    // Copy-on-write edits
    // =========================================================================

    /// Add a file under `parent`. Unchanged on collision, bad name, or missing parent.
    pub fn create_file(&self, parent: &str, name: &str, content: &str, now: u64) -> Self {
        self.insert_child(parent, FsNode::file(name, content, now))
    }

    /// Add a directory under `parent`. Unchanged on collision, bad name, or missing parent.
    pub fn create_directory(&self, parent: &str, name: &str, now: u64) -> Self {
        self.insert_child(parent, FsNode::directory(name, now))
    }

    /// Replace the content of an existing file.
    pub fn write_file(&self, path: &str, content: &str, now: u64) -> Self {
        self.edit(path, |node| match node.kind {
            NodeKind::File {
                content: ref mut current,
            } => {
                *current = content.to_string();
                node.modified_at = now;
                true
            }
            NodeKind::Directory { .. } => false,
        })
    }

    /// Remove `name` and its whole subtree from `parent`.
    ///
    /// Guarding directories is left to the caller.
    pub fn remove(&self, parent: &str, name: &str) -> Self {
        self.edit(parent, |dir| {
            let Some(children) = dir.children_mut() else {
                return false;
            };
            let Some(pos) = children.iter().position(|c| c.name == name) else {
                return false;
            };
            children.remove(pos);
            true
        })
    }

    fn insert_child(&self, parent: &str, node: FsNode) -> Self {
        if !is_valid_name(&node.name) {
            return self.clone();
        }
        self.edit(parent, |dir| {
            let Some(children) = dir.children_mut() else {
                return false;
            };
            if children.iter().any(|c| c.name == node.name) {
                return false;
            }
            children.push(Arc::new(node));
            true
        })
    }

    /// Clone the path to `path`, apply `apply` to the node there, and return
    /// the new snapshot. `apply` returns `false` to leave the tree unchanged.
    fn edit(&self, path: &str, apply: impl FnOnce(&mut FsNode) -> bool) -> Self {
        if self.lookup(path).is_none() {
            return self.clone();
        }

        let mut root = Arc::clone(&self.root);
        let mut node: &mut FsNode = Arc::make_mut(&mut root);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let Some(children) = node.children_mut() else {
                return self.clone();
            };
            let Some(child) = children.iter_mut().find(|c| c.name == segment) else {
                return self.clone();
            };
            node = Arc::make_mut(child);
        }

        if apply(node) {
            Self { root }
        } else {
            self.clone()
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}
