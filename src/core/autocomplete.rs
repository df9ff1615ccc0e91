//! Tab autocomplete functionality for terminal commands and paths.
//!
//! This module provides autocompletion for:
//! - Command names (e.g., "cl" → "clear")
//! - Directory paths for `cd`, `mkdir`
//! - Any path for `ls`, `cat`, `touch`, `rm`
//!
//! The autocomplete system supports:
//! - Single match: Complete immediately
//! - Multiple matches: Show common prefix and all options
//! - Ghost text hints while typing

use std::sync::Arc;

use crate::core::{Command, VirtualFs};
use crate::models::FsNode;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single exact match - complete with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands that accept directory paths as arguments.
const DIR_COMMANDS: &[&str] = &["cd", "mkdir"];

/// Commands that accept any path as an argument.
const PATH_COMMANDS: &[&str] = &["cat", "ls", "rm", "touch"];

// ============================================================================
// Completion Context
// ============================================================================

/// Determines what type of completion is needed for a command.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode {
    /// Complete command names only.
    Command,
    /// Complete directory paths.
    DirectoryPath,
    /// Complete file or directory paths.
    AnyPath,
    /// No completion available.
    None,
}

impl CompletionMode {
    /// Determine completion mode from input.
    ///
    /// Returns the mode, the verb, and the argument being completed.
    fn from_input(input: &str) -> (Self, &str, &str) {
        let Some((cmd, rest)) = input.split_once(' ') else {
            return (Self::Command, input, "");
        };

        // Flags before the path (`ls -l pro`, `rm -r tm`) are kept in the verb part.
        let (cmd, partial) = match rest.rfind(' ') {
            Some(idx) => (&input[..cmd.len() + 1 + idx], &rest[idx + 1..]),
            None => (cmd, rest),
        };

        let verb = input
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let mode = if DIR_COMMANDS.contains(&verb.as_str()) {
            Self::DirectoryPath
        } else if PATH_COMMANDS.contains(&verb.as_str()) {
            Self::AnyPath
        } else {
            Self::None
        };

        (mode, cmd, partial)
    }

    /// Returns true if this mode only matches directories.
    fn dirs_only(self) -> bool {
        matches!(self, Self::DirectoryPath)
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Parsed path components for autocomplete.
struct ParsedPath<'a> {
    /// Directory prefix (e.g., "projects/" or "").
    dir_part: &'a str,
    /// Filename/directory name being completed.
    name_part: &'a str,
    /// Resolved search directory path.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    /// Parse a partial path and resolve the search directory.
    fn parse(partial: &'a str, cwd: &str) -> Self {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let search_dir = if dir_part.is_empty() {
            cwd.to_string()
        } else {
            VirtualFs::resolve(cwd, dir_part)
        };

        Self {
            dir_part,
            name_part,
            search_dir,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
///
/// Returns a completion result based on the current input and filesystem state.
pub fn autocomplete(input: &str, cwd: &str, fs: &VirtualFs) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let (mode, cmd, partial) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => complete_command(cmd),
        CompletionMode::DirectoryPath | CompletionMode::AnyPath => {
            complete_path(cmd, partial, cwd, fs, mode.dirs_only())
        }
        CompletionMode::None => AutocompleteResult::None,
    }
}

/// Get autocomplete suggestion for ghost text hint (while typing).
///
/// Returns the suffix that would complete the current input.
pub fn get_hint(input: &str, cwd: &str, fs: &VirtualFs) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let (mode, cmd, partial) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => get_command_hint(cmd),
        CompletionMode::DirectoryPath | CompletionMode::AnyPath => {
            get_path_hint(partial, cwd, fs, mode.dirs_only())
        }
        CompletionMode::None => None,
    }
}

/// Apply a completion to the input line.
///
/// Returns the new input and, for ambiguous completions, the candidates to show.
pub fn apply_completion(input: &str, result: AutocompleteResult) -> (String, Option<Vec<String>>) {
    match result {
        AutocompleteResult::Single(completed) => (completed, None),
        AutocompleteResult::Multiple(common, matches) => {
            // Never shrink what the user already typed.
            let next = if common.len() > input.trim_start().len() {
                common
            } else {
                input.to_string()
            };
            (next, Some(matches))
        }
        AutocompleteResult::None => (input.to_string(), None),
    }
}

// ============================================================================
// Command Completion
// ============================================================================

/// Complete command name.
fn complete_command(partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(|s| s.to_string())
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

/// Get hint for command name completion.
fn get_command_hint(partial: &str) -> Option<String> {
    let partial_lower = partial.to_lowercase();
    Command::names()
        .iter()
        .find(|cmd| cmd.starts_with(&partial_lower) && **cmd != partial_lower)
        .map(|cmd| cmd[partial.len()..].to_string())
}

// ============================================================================
// Path Completion
// ============================================================================

/// Complete file/directory path.
fn complete_path(
    cmd: &str,
    partial: &str,
    cwd: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    let parsed = ParsedPath::parse(partial, cwd);

    let Some(entries) = fs.list_children(&parsed.search_dir) else {
        return AutocompleteResult::None;
    };

    let matches = get_matching_entries(entries, parsed.name_part, dirs_only);
    build_path_result(cmd, &parsed, matches)
}

/// Get hint for path completion.
fn get_path_hint(partial: &str, cwd: &str, fs: &VirtualFs, dirs_only: bool) -> Option<String> {
    let parsed = ParsedPath::parse(partial, cwd);
    let entries = fs.list_children(&parsed.search_dir)?;
    let matches = get_matching_entries(entries, parsed.name_part, dirs_only);

    // Find first match that extends current input
    let name_lower = parsed.name_part.to_lowercase();
    matches
        .iter()
        .find(|(name, _)| name.to_lowercase() != name_lower)
        .map(|(name, is_dir)| {
            let suffix = if *is_dir { "/" } else { "" };
            format!("{}{}", &name[parsed.name_part.len()..], suffix)
        })
}

/// Get filtered entries matching the partial name.
fn get_matching_entries<'a>(
    entries: &'a [Arc<FsNode>],
    name_part: &str,
    dirs_only: bool,
) -> Vec<(&'a str, bool)> {
    let name_lower = name_part.to_lowercase();
    entries
        .iter()
        .filter(|node| {
            if dirs_only && !node.is_directory() {
                return false;
            }
            node.name.to_lowercase().starts_with(&name_lower)
        })
        .map(|node| (node.name.as_str(), node.is_directory()))
        .collect()
}

/// Build the autocomplete result from matched paths.
fn build_path_result(cmd: &str, parsed: &ParsedPath, matches: Vec<(&str, bool)>) -> AutocompleteResult {
    // Build full paths with directory info
    let full_matches: Vec<(String, bool)> = matches
        .iter()
        .map(|(name, is_dir)| (format!("{}{}", parsed.dir_part, name), *is_dir))
        .collect();

    match full_matches.len() {
        0 => AutocompleteResult::None,
        1 => {
            let (path, is_dir) = &full_matches[0];
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{} {}{}", cmd, path, suffix))
        }
        _ => {
            let paths: Vec<String> = full_matches.iter().map(|(p, _)| p.clone()).collect();
            let common = find_common_prefix(&paths);

            let display_names: Vec<String> = matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.to_string()
                    }
                })
                .collect();

            AutocompleteResult::Multiple(format!("{} {}", cmd, common), display_names)
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings (case-insensitive).
fn find_common_prefix(strings: &[String]) -> String {
    if strings.is_empty() {
        return String::new();
    }
    if strings.len() == 1 {
        return strings[0].clone();
    }

    let first = &strings[0];
    let mut prefix_chars = first.chars().count();

    for s in &strings[1..] {
        prefix_chars = first
            .chars()
            .zip(s.chars())
            .take(prefix_chars)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first.chars().take(prefix_chars).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    fn fs() -> VirtualFs {
        VirtualFs::seeded(NOW)
            .create_directory("/home", "photos", NOW)
            .create_file("/home", "profile.txt", "", NOW)
    }

    #[test]
    fn test_command_completion_single() {
        match complete_command("cle") {
            AutocompleteResult::Single(s) => assert_eq!(s, "clear "),
            _ => panic!("Expected single match"),
        }
    }

    #[test]
    fn test_command_completion_multiple() {
        match complete_command("c") {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "c");
                assert!(matches.contains(&"cat".to_string()));
                assert!(matches.contains(&"cd".to_string()));
                assert!(matches.contains(&"curl".to_string()));
            }
            _ => panic!("Expected multiple matches"),
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete_command("xyz"), AutocompleteResult::None);
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
    }

    #[test]
    fn test_completion_mode() {
        let (mode, ..) = CompletionMode::from_input("cd");
        assert_eq!(mode, CompletionMode::Command);

        let (mode, ..) = CompletionMode::from_input("cd some/path");
        assert_eq!(mode, CompletionMode::DirectoryPath);

        let (mode, cmd, partial) = CompletionMode::from_input("rm -r tm");
        assert_eq!(mode, CompletionMode::AnyPath);
        assert_eq!(cmd, "rm -r");
        assert_eq!(partial, "tm");

        let (mode, ..) = CompletionMode::from_input("whoami arg");
        assert_eq!(mode, CompletionMode::None);
    }

    #[test]
    fn test_directory_completion_skips_files() {
        let fs = fs();
        assert_eq!(
            autocomplete("cd pro", "/home", &fs),
            AutocompleteResult::Single("cd projects/".to_string())
        );
    }

    #[test]
    fn test_path_completion_multiple() {
        let fs = fs();
        match autocomplete("cat p", "/home", &fs) {
            AutocompleteResult::Multiple(common, names) => {
                assert_eq!(common, "cat p");
                assert_eq!(names, vec!["projects/", "photos/", "profile.txt"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_nested_and_absolute_paths() {
        let fs = fs();
        assert_eq!(
            autocomplete("cat /etc/ho", "/home", &fs),
            AutocompleteResult::Single("cat /etc/hostname ".to_string())
        );
        assert_eq!(
            autocomplete("ls ../t", "/home", &fs),
            AutocompleteResult::Single("ls ../tmp/".to_string())
        );
    }

    #[test]
    fn test_hints() {
        let fs = fs();
        assert_eq!(get_hint("pi", "/home", &fs), Some("ng".to_string()));
        assert_eq!(get_hint("cat read", "/home", &fs), Some("me.txt".to_string()));
        assert_eq!(get_hint("", "/home", &fs), None);
    }

    #[test]
    fn test_apply_completion() {
        assert_eq!(
            apply_completion("cle", AutocompleteResult::Single("clear ".into())),
            ("clear ".to_string(), None)
        );
        let (line, shown) = apply_completion(
            "cat p",
            AutocompleteResult::Multiple("cat pro".into(), vec!["a".into()]),
        );
        assert_eq!(line, "cat pro");
        assert_eq!(shown, Some(vec!["a".to_string()]));
        assert_eq!(
            apply_completion("zz", AutocompleteResult::None),
            ("zz".to_string(), None)
        );
    }
}
