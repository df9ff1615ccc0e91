//! Custom hooks for terminal components.
//!
//! Provides reusable stateful logic for terminal input handling.

use leptos::prelude::*;

use crate::core::{AutocompleteResult, apply_completion};

/// Tab completion and ghost hint state for one input line.
///
/// The first Tab applies the completion; when it is ambiguous, further Tab
/// presses cycle through the candidates.
#[derive(Clone, Copy)]
pub struct CompletionState {
    /// Candidates of the last ambiguous completion.
    pub matches: RwSignal<Vec<String>>,
    /// Selected candidate while cycling.
    pub index: RwSignal<Option<usize>>,
    /// Line the candidates are spliced into.
    pub base: RwSignal<String>,
    /// Suffix shown after the cursor while typing.
    pub hint: RwSignal<Option<String>>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self {
            matches: RwSignal::new(vec![]),
            index: RwSignal::new(None),
            base: RwSignal::new(String::new()),
            hint: RwSignal::new(None),
        }
    }

    /// Check if currently in Tab cycling mode (has matches).
    pub fn is_cycling(&self) -> bool {
        self.matches.with(|m| !m.is_empty())
    }

    /// Drop the cycle, keeping the hint.
    pub fn stop_cycle(&self) {
        self.matches.set(vec![]);
        self.index.set(None);
        self.base.set(String::new());
    }

    /// Drop everything.
    pub fn reset(&self) {
        self.stop_cycle();
        self.hint.set(None);
    }

    /// Apply the first Tab press. Returns the new input line, if it changed.
    pub fn begin(&self, input: &str, result: AutocompleteResult) -> Option<String> {
        self.hint.set(None);
        let (line, candidates) = apply_completion(input, result);
        if let Some(candidates) = candidates {
            self.base.set(line.clone());
            self.matches.set(candidates);
            self.index.set(None);
        }
        (line != input).then_some(line)
    }

    /// Select the next candidate and return the line with it spliced in.
    pub fn next(&self) -> Option<String> {
        let len = self.matches.with(Vec::len);
        if len == 0 {
            return None;
        }
        let next = self.index.get().map_or(0, |i| (i + 1) % len);
        self.index.set(Some(next));

        let candidate = self.matches.with(|m| m.get(next).cloned())?;
        Some(self.base.with(|base| splice_candidate(base, &candidate)))
    }
}

impl Default for CompletionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the word being completed in `base` with `candidate`.
///
/// Path candidates are bare names (`projects/`), so the directory part of
/// the argument is kept. A bare command name replaces the whole line.
fn splice_candidate(base: &str, candidate: &str) -> String {
    let Some((head, word)) = base.rsplit_once(' ') else {
        return candidate.to_string();
    };
    match word.rsplit_once('/') {
        Some((dir, _)) => format!("{head} {dir}/{candidate}"),
        None => format!("{head} {candidate}"),
    }
}

/// Input element caret offsets count UTF-16 code units.
pub fn utf16_len(value: &str) -> u32 {
    value.encode_utf16().count() as u32
}

/// Whether a caret offset from the input element sits after the last character.
pub fn caret_at_end(caret: u32, value: &str) -> bool {
    caret == utf16_len(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_command_candidate() {
        assert_eq!(splice_candidate("p", "pause"), "pause");
    }

    #[test]
    fn test_splice_path_candidate() {
        assert_eq!(splice_candidate("cat ", "readme.txt"), "cat readme.txt");
        assert_eq!(splice_candidate("cd pro", "projects/"), "cd projects/");
        assert_eq!(
            splice_candidate("ls /home/r", "readme.txt"),
            "ls /home/readme.txt"
        );
    }

    #[test]
    fn test_splice_keeps_flags() {
        assert_eq!(splice_candidate("rm -r /tmp/", "x/"), "rm -r /tmp/x/");
        assert_eq!(splice_candidate("rm -r ", "x/"), "rm -r x/");
    }

    #[test]
    fn test_caret_at_end_counts_utf16_units() {
        assert!(caret_at_end(5, "cd pr"));
        assert!(!caret_at_end(3, "cd pr"));
        // "é" is two UTF-8 bytes but one UTF-16 unit
        assert!(caret_at_end(8, "cat café"));
        assert!(!caret_at_end(9, "cat café"));
        // "🎵" is a surrogate pair
        assert!(caret_at_end(7, "play 🎵"));
    }
}
