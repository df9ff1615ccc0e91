//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `ContentTable` for the compiled-in text pages
//!
//! # Architecture
//!
//! A submitted line is parsed into the `Command` enum, then executed via
//! `execute_command` against the session's shell state and the shared
//! player. Work that cannot finish synchronously (`curl`, `ping`, `exit`)
//! is returned as an [`Action`] for the host to carry out.

mod content;
mod execute;
mod result;

pub use content::ContentTable;
pub use execute::{ShellState, execute_command};
pub use result::{Action, CommandResult};

use std::fmt;

use crate::core::player::Selector;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// The path is stored as-is (not validated) since resolution happens
/// during execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Output target of `echo text > file` / `echo text >> file`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: PathArg,
    pub append: bool,
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// List directory contents. `long` = `-l`
    Ls {
        path: Option<PathArg>,
        long: bool,
    },
    /// `None` means home.
    Cd(Option<PathArg>),
    Pwd,
    Mkdir(Option<PathArg>),
    Touch(Option<PathArg>),
    Cat(Option<PathArg>),
    Echo {
        text: String,
        redirect: Option<Redirect>,
    },
    Rm {
        target: Option<PathArg>,
        recursive: bool,
    },
    Curl(Option<String>),
    Ping(Option<String>),
    Play(Option<Selector>),
    Pause,
    Next,
    Prev,
    List,
    Status,
    Date,
    Clear,
    Exit,
    /// A compiled-in text page (`help`, `about`, ...).
    Static(ContentTable),
    /// Blank line.
    Empty,
    Unknown(String),
}

impl Command {
    /// Get all available command names for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &[
            "about",
            "cat",
            "cd",
            "clear",
            "contact",
            "curl",
            "date",
            "echo",
            "exit",
            "experience",
            "help",
            "list",
            "ls",
            "mkdir",
            "music",
            "next",
            "pause",
            "ping",
            "play",
            "prev",
            "projects",
            "pwd",
            "rm",
            "skills",
            "status",
            "syntx",
            "touch",
            "uptime",
            "whoami",
        ]
    }

    /// Parse a submitted line.
    ///
    /// Only the verb is matched case-insensitively; arguments keep their case.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();
        // Path verbs take the whole remainder, spaces included
        let operand = (!rest.is_empty()).then(|| PathArg::new(rest));

        match verb.to_lowercase().as_str() {
            "ls" => {
                let mut long = false;
                let mut path = None;
                for arg in &args {
                    if *arg == "-l" {
                        long = true;
                    } else if path.is_none() {
                        path = Some(PathArg::new(*arg));
                    }
                }
                Self::Ls { path, long }
            }
            "cd" => Self::Cd(operand),
            "mkdir" => Self::Mkdir(operand),
            "touch" => Self::Touch(operand),
            "cat" => Self::Cat(operand),
            "echo" => parse_echo(rest),
            "rm" => {
                let mut recursive = false;
                let mut target = None;
                for arg in &args {
                    if arg.starts_with('-') && arg.len() > 1 {
                        recursive |= arg.contains(['r', 'R']);
                    } else if target.is_none() {
                        target = Some(PathArg::new(*arg));
                    }
                }
                Self::Rm { target, recursive }
            }
            "curl" => Self::Curl(args.first().map(|a| a.to_string())),
            "ping" => Self::Ping(args.first().map(|a| a.to_string())),
            "play" => Self::Play(Selector::parse(rest)),
            "pause" if args.is_empty() => Self::Pause,
            "next" if args.is_empty() => Self::Next,
            "prev" if args.is_empty() => Self::Prev,
            "list" if args.is_empty() => Self::List,
            "status" if args.is_empty() => Self::Status,
            "pwd" if args.is_empty() => Self::Pwd,
            "date" if args.is_empty() => Self::Date,
            "clear" if args.is_empty() => Self::Clear,
            "exit" if args.is_empty() => Self::Exit,
            name if args.is_empty() => ContentTable::from_verb(name)
                .map(Self::Static)
                .unwrap_or_else(|| Self::Unknown(verb.to_string())),
            _ => Self::Unknown(verb.to_string()),
        }
    }
}

/// Split `text > file` / `text >> file`, then unquote the text.
fn parse_echo(rest: &str) -> Command {
    let split = rest
        .split_once(" >> ")
        .map(|(text, path)| (text, path, true))
        .or_else(|| rest.split_once(" > ").map(|(text, path)| (text, path, false)))
        .or_else(|| rest.strip_prefix(">> ").map(|path| ("", path, true)))
        .or_else(|| rest.strip_prefix("> ").map(|path| ("", path, false)));

    match split {
        Some((text, path, append)) => {
            let path = path.trim();
            Command::Echo {
                text: unquote(text.trim()).to_string(),
                redirect: (!path.is_empty()).then(|| Redirect {
                    path: PathArg::new(path),
                    append,
                }),
            }
        }
        None => Command::Echo {
            text: unquote(rest).to_string(),
            redirect: None,
        },
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2
            && let Some(inner) = text
                .strip_prefix(quote)
                .and_then(|t| t.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_case_insensitive() {
        assert_eq!(Command::parse("CD /tmp"), Command::parse("cd /tmp"));
        assert_eq!(Command::parse("  PWD "), Command::Pwd);
    }

    #[test]
    fn test_parse_arguments_keep_case() {
        assert_eq!(
            Command::parse("mkdir Notes"),
            Command::Mkdir(Some(PathArg::new("Notes")))
        );
    }

    #[test]
    fn test_parse_path_operand_keeps_spaces() {
        assert_eq!(
            Command::parse("mkdir my notes"),
            Command::Mkdir(Some(PathArg::new("my notes")))
        );
        assert_eq!(
            Command::parse("touch  draft one.txt "),
            Command::Touch(Some(PathArg::new("draft one.txt")))
        );
        assert_eq!(
            Command::parse("cat my notes/todo"),
            Command::Cat(Some(PathArg::new("my notes/todo")))
        );
        assert_eq!(
            Command::parse("cd my notes"),
            Command::Cd(Some(PathArg::new("my notes")))
        );
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(
            Command::parse("ls -l /etc"),
            Command::Ls {
                path: Some(PathArg::new("/etc")),
                long: true
            }
        );
        assert_eq!(
            Command::parse("ls"),
            Command::Ls {
                path: None,
                long: false
            }
        );
    }

    #[test]
    fn test_parse_echo_redirect() {
        assert_eq!(
            Command::parse("echo \"hello world\" > notes.txt"),
            Command::Echo {
                text: "hello world".into(),
                redirect: Some(Redirect {
                    path: PathArg::new("notes.txt"),
                    append: false,
                }),
            }
        );
        assert_eq!(
            Command::parse("echo more >> notes.txt"),
            Command::Echo {
                text: "more".into(),
                redirect: Some(Redirect {
                    path: PathArg::new("notes.txt"),
                    append: true,
                }),
            }
        );
    }

    #[test]
    fn test_parse_echo_plain() {
        assert_eq!(
            Command::parse("echo 'hi there'"),
            Command::Echo {
                text: "hi there".into(),
                redirect: None,
            }
        );
    }

    #[test]
    fn test_parse_rm_flags() {
        for line in ["rm -r dir", "rm -rf dir", "rm -R dir", "rm -fr dir"] {
            assert_eq!(
                Command::parse(line),
                Command::Rm {
                    target: Some(PathArg::new("dir")),
                    recursive: true
                },
                "{line}"
            );
        }
        assert_eq!(
            Command::parse("rm -f dir"),
            Command::Rm {
                target: Some(PathArg::new("dir")),
                recursive: false
            }
        );
    }

    #[test]
    fn test_parse_play_selector() {
        assert_eq!(Command::parse("play"), Command::Play(None));
        assert_eq!(
            Command::parse("play 2"),
            Command::Play(Some(Selector::Index(2)))
        );
        assert_eq!(
            Command::parse("play Midnight City"),
            Command::Play(Some(Selector::Name("Midnight City".into())))
        );
    }

    #[test]
    fn test_parse_static_tables() {
        assert_eq!(Command::parse("HELP"), Command::Static(ContentTable::Help));
        assert_eq!(
            Command::parse("about me"),
            Command::Unknown("about".into())
        );
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("sudo ls"), Command::Unknown("sudo".into()));
    }

    #[test]
    fn test_names_sorted_and_parseable() {
        let names = Command::names();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        for name in names {
            assert!(
                !matches!(Command::parse(name), Command::Unknown(_)),
                "{name}"
            );
        }
    }
}
