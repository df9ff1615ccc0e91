//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the session's filesystem snapshot and the shared player.

use crate::config::filesystem::HOME_DIR;
use crate::core::VirtualFs;
use crate::core::error::{CommandError, PlayerError};
use crate::core::player::{Player, PlayerAction};
use crate::models::OutputLine;
use crate::utils::{format_local_date, normalize_probe_url};

use super::{Action, Command, CommandResult, PathArg, Redirect};

/// Filesystem snapshot plus working directory of one terminal session.
#[derive(Clone, Debug)]
pub struct ShellState {
    pub fs: VirtualFs,
    /// Always an existing directory.
    pub cwd: String,
}

impl ShellState {
    pub fn new(fs: VirtualFs) -> Self {
        Self {
            fs,
            cwd: HOME_DIR.to_string(),
        }
    }

    fn resolve(&self, arg: &PathArg) -> String {
        VirtualFs::resolve(&self.cwd, arg.as_str())
    }
}

type Lines = Result<Vec<OutputLine>, CommandError>;

/// Execute a parsed command.
///
/// Filesystem edits replace `shell.fs` with a new snapshot. Failures are
/// rendered as a single error line; nothing propagates out.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `shell` - Filesystem snapshot and working directory
/// * `player` - Shared music player state
/// * `now` - Current time in Unix milliseconds, used for timestamps and `date`
pub fn execute_command(
    cmd: Command,
    shell: &mut ShellState,
    player: &mut Player,
    now: u64,
) -> CommandResult {
    match run(cmd, shell, player, now) {
        Ok(result) => result,
        Err(e) => CommandResult::output(vec![OutputLine::error(e.to_string())]),
    }
}

fn run(
    cmd: Command,
    shell: &mut ShellState,
    player: &mut Player,
    now: u64,
) -> Result<CommandResult, CommandError> {
    let lines = match cmd {
        Command::Ls { path, long } => execute_ls(path, long, shell)?,
        Command::Cd(path) => execute_cd(path, shell)?,
        Command::Pwd => vec![OutputLine::text(shell.cwd.clone())],
        Command::Mkdir(path) => execute_mkdir(path, shell, now)?,
        Command::Touch(path) => execute_touch(path, shell, now)?,
        Command::Cat(path) => execute_cat(path, shell)?,
        Command::Echo { text, redirect } => match redirect {
            Some(redirect) => execute_redirect(text, redirect, shell, now)?,
            None => vec![OutputLine::text(text)],
        },
        Command::Rm { target, recursive } => execute_rm(target, recursive, shell)?,
        Command::Curl(url) => {
            let url = url.ok_or(CommandError::MissingOperand("curl"))?;
            return Ok(CommandResult::action(Action::Curl(normalize_probe_url(
                &url,
            ))));
        }
        Command::Ping(host) => {
            let host = host.ok_or(CommandError::MissingOperand("ping"))?;
            return Ok(CommandResult::action(Action::Ping(host)));
        }
        Command::Play(selector) => {
            player_action("play", player, PlayerAction::Play(selector))?;
            vec![OutputLine::success(player.status_line())]
        }
        Command::Pause => {
            player_action("pause", player, PlayerAction::Pause)?;
            vec![OutputLine::info(player.status_line())]
        }
        Command::Next => {
            player_action("next", player, PlayerAction::Next)?;
            vec![OutputLine::text(player.status_line())]
        }
        Command::Prev => {
            player_action("prev", player, PlayerAction::Prev)?;
            vec![OutputLine::text(player.status_line())]
        }
        Command::List => {
            if player.songs().is_empty() {
                return Err(CommandError::Player {
                    verb: "list",
                    source: PlayerError::EmptyPlaylist,
                });
            }
            player.list_lines().into_iter().map(OutputLine::text).collect()
        }
        Command::Status => vec![OutputLine::text(player.status_line())],
        Command::Date => vec![OutputLine::text(format_local_date(now))],
        Command::Clear => return Ok(CommandResult::action(Action::Clear)),
        Command::Exit => return Ok(CommandResult::action(Action::Exit)),
        Command::Static(table) => table.lines(),
        Command::Empty => vec![],
        Command::Unknown(_) => vec![OutputLine::error(
            "Command not found. Type \"help\" for available commands.",
        )],
    };
    Ok(CommandResult::output(lines))
}

fn player_action(
    verb: &'static str,
    player: &mut Player,
    action: PlayerAction,
) -> Result<(), CommandError> {
    player
        .apply(action)
        .map_err(|source| CommandError::Player { verb, source })
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, long: bool, shell: &ShellState) -> Lines {
    let target = path.unwrap_or_else(|| PathArg::new("."));
    let resolved = shell.resolve(&target);
    let node = shell
        .fs
        .lookup(&resolved)
        .ok_or_else(|| CommandError::CannotAccess(target.to_string()))?;

    let Some(children) = node.children() else {
        // A file lists as itself.
        return Ok(vec![if long {
            OutputLine::long_entry(node)
        } else {
            OutputLine::file_entry(node.name.clone())
        }]);
    };

    Ok(children
        .iter()
        .map(|child| {
            if long {
                OutputLine::long_entry(child)
            } else if child.is_directory() {
                OutputLine::dir_entry(format!("{}/", child.name))
            } else {
                OutputLine::file_entry(child.name.clone())
            }
        })
        .collect())
}

/// Execute `cd` command. No argument goes home.
fn execute_cd(path: Option<PathArg>, shell: &mut ShellState) -> Lines {
    let Some(target) = path else {
        shell.cwd = HOME_DIR.to_string();
        return Ok(vec![]);
    };
    let resolved = shell.resolve(&target);
    match shell.fs.lookup(&resolved) {
        Some(node) if node.is_directory() => {
            shell.cwd = resolved;
            Ok(vec![])
        }
        Some(_) => Err(CommandError::NotADirectory(target.to_string())),
        None => Err(CommandError::NoSuchDirectory(target.to_string())),
    }
}

/// Resolve `arg` to `(parent, leaf)`, requiring the parent directory to exist.
///
/// Returns `None` for the root, which always exists.
fn creation_target(
    verb: &'static str,
    arg: &PathArg,
    shell: &ShellState,
) -> Result<Option<(String, String)>, CommandError> {
    let resolved = shell.resolve(arg);
    let Some((parent, leaf)) = VirtualFs::split_parent(&resolved) else {
        return Ok(None);
    };
    if !shell.fs.is_directory(&parent) {
        return Err(CommandError::MissingParent {
            verb,
            path: arg.to_string(),
        });
    }
    Ok(Some((parent, leaf)))
}

/// Execute `mkdir`. An existing name is reported as success.
fn execute_mkdir(path: Option<PathArg>, shell: &mut ShellState, now: u64) -> Lines {
    let arg = path.ok_or(CommandError::MissingOperand("mkdir"))?;
    if let Some((parent, leaf)) = creation_target("mkdir", &arg, shell)? {
        shell.fs = shell.fs.create_directory(&parent, &leaf, now);
    }
    Ok(vec![OutputLine::success(format!("Directory created: {arg}"))])
}

/// Execute `touch`. An existing name is reported as success.
fn execute_touch(path: Option<PathArg>, shell: &mut ShellState, now: u64) -> Lines {
    let arg = path.ok_or(CommandError::MissingOperand("touch"))?;
    if let Some((parent, leaf)) = creation_target("touch", &arg, shell)? {
        shell.fs = shell.fs.create_file(&parent, &leaf, "", now);
    }
    Ok(vec![OutputLine::success(format!("File created: {arg}"))])
}

/// Execute `cat` command.
fn execute_cat(path: Option<PathArg>, shell: &ShellState) -> Lines {
    let arg = path.ok_or(CommandError::MissingOperand("cat"))?;
    let content = shell
        .fs
        .lookup(&shell.resolve(&arg))
        .and_then(|node| node.content())
        .ok_or_else(|| CommandError::NoSuchFile(arg.to_string()))?;

    if content.is_empty() {
        Ok(vec![OutputLine::info("(empty file)")])
    } else {
        Ok(OutputLine::text_block(content))
    }
}

/// Execute `echo text > file` / `echo text >> file`: write an existing file
/// or create it.
fn execute_redirect(text: String, redirect: Redirect, shell: &mut ShellState, now: u64) -> Lines {
    let Redirect { path, append } = redirect;
    let resolved = shell.resolve(&path);

    if let Some(node) = shell.fs.lookup(&resolved) {
        let Some(existing) = node.content() else {
            return Err(CommandError::RedirectToDirectory(path.to_string()));
        };
        let content = if append && !existing.is_empty() {
            format!("{existing}\n{text}")
        } else {
            text
        };
        shell.fs = shell.fs.write_file(&resolved, &content, now);
    } else {
        let (parent, leaf) = creation_target("echo", &path, shell)?
            .ok_or_else(|| CommandError::RedirectToDirectory(path.to_string()))?;
        shell.fs = shell.fs.create_file(&parent, &leaf, &text, now);
    }
    Ok(vec![OutputLine::success(format!("Written to {path}"))])
}

/// Execute `rm`. Directories need a recursive flag.
fn execute_rm(target: Option<PathArg>, recursive: bool, shell: &mut ShellState) -> Lines {
    let arg = target.ok_or(CommandError::MissingOperand("rm"))?;
    let resolved = shell.resolve(&arg);
    let Some((parent, leaf)) = VirtualFs::split_parent(&resolved) else {
        return Err(CommandError::RemoveRoot);
    };
    let node = shell
        .fs
        .lookup(&resolved)
        .ok_or_else(|| CommandError::CannotRemove(arg.to_string()))?;

    if !recursive && node.is_directory() {
        return Err(CommandError::IsADirectory(arg.to_string()));
    }

    shell.fs = shell.fs.remove(&parent, &leaf);
    if VirtualFs::is_within(&shell.cwd, &resolved) {
        shell.cwd = parent;
    }
    Ok(vec![OutputLine::success(format!("Removed: {arg}"))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListFormat, Song};

    const NOW: u64 = 1_700_000_000_000;

    fn shell() -> ShellState {
        ShellState::new(VirtualFs::seeded(NOW))
    }

    fn player() -> Player {
        Player::new(vec![
            Song {
                name: "Nightcall".into(),
                audio_src: "audio/nightcall.mp3".into(),
                image_src: String::new(),
            },
            Song {
                name: "Midnight City".into(),
                audio_src: "audio/midnight.mp3".into(),
                image_src: String::new(),
            },
        ])
    }

    fn exec(line: &str, shell: &mut ShellState) -> CommandResult {
        execute_command(Command::parse(line), shell, &mut player(), NOW)
    }

    fn texts(result: &CommandResult) -> Vec<String> {
        result
            .output
            .iter()
            .map(|l| l.plain_text().to_string())
            .collect()
    }

    fn is_error(result: &CommandResult) -> bool {
        matches!(result.output.as_slice(), [OutputLine::Error(_)])
    }

    #[test]
    fn test_cd_case_insensitive_verb() {
        let mut a = shell();
        let mut b = shell();
        exec("cd /tmp", &mut a);
        exec("CD /tmp", &mut b);
        assert_eq!(a.cwd, "/tmp");
        assert_eq!(a.cwd, b.cwd);
    }

    #[test]
    fn test_cd_errors_leave_cwd() {
        let mut sh = shell();
        assert!(is_error(&exec("cd nowhere", &mut sh)));
        assert!(is_error(&exec("cd readme.txt", &mut sh)));
        assert_eq!(sh.cwd, "/home");

        exec("cd /etc", &mut sh);
        exec("cd", &mut sh);
        assert_eq!(sh.cwd, "/home");
    }

    #[test]
    fn test_notes_scenario() {
        let mut sh = shell();
        exec("mkdir notes", &mut sh);
        exec("cd notes", &mut sh);
        assert_eq!(sh.cwd, "/home/notes");

        exec("touch a.txt", &mut sh);
        exec("echo \"hello world\" > a.txt", &mut sh);
        assert_eq!(texts(&exec("cat a.txt", &mut sh)), vec!["hello world"]);

        exec("cd ..", &mut sh);
        assert_eq!(sh.cwd, "/home");
        assert!(texts(&exec("ls", &mut sh)).contains(&"notes/".to_string()));

        assert!(is_error(&exec("rm notes", &mut sh)));
        assert!(sh.fs.is_directory("/home/notes"));

        exec("rm -r notes", &mut sh);
        assert!(sh.fs.lookup("/home/notes").is_none());
    }

    #[test]
    fn test_create_is_idempotent() {
        let mut sh = shell();
        let first = exec("mkdir docs", &mut sh);
        let second = exec("mkdir docs", &mut sh);
        assert!(!is_error(&first));
        assert_eq!(first, second);
        let names: Vec<_> = sh
            .fs
            .list_children("/home")
            .unwrap()
            .iter()
            .filter(|n| n.name == "docs")
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_mkdir_missing_parent() {
        let mut sh = shell();
        let result = exec("mkdir a/b", &mut sh);
        assert_eq!(
            texts(&result),
            vec!["mkdir: cannot create 'a/b': No such file or directory"]
        );
    }

    #[test]
    fn test_echo_creates_then_overwrites() {
        let mut sh = shell();
        exec("echo one > new.txt", &mut sh);
        exec("echo two > new.txt", &mut sh);
        assert_eq!(texts(&exec("cat new.txt", &mut sh)), vec!["two"]);

        exec("echo three >> new.txt", &mut sh);
        assert_eq!(texts(&exec("cat new.txt", &mut sh)), vec!["two", "three"]);
    }

    #[test]
    fn test_echo_into_directory_fails() {
        let mut sh = shell();
        assert!(is_error(&exec("echo x > projects", &mut sh)));
    }

    #[test]
    fn test_cat_errors_and_empty() {
        let mut sh = shell();
        assert_eq!(
            texts(&exec("cat projects", &mut sh)),
            vec!["cat: projects: No such file"]
        );
        assert_eq!(
            texts(&exec("cat ghost", &mut sh)),
            vec!["cat: ghost: No such file"]
        );
        exec("touch empty.txt", &mut sh);
        assert_eq!(
            exec("cat empty.txt", &mut sh).output,
            vec![OutputLine::info("(empty file)")]
        );
    }

    #[test]
    fn test_ls_insertion_order_and_suffix() {
        let mut sh = shell();
        exec("touch b.txt", &mut sh);
        exec("mkdir a", &mut sh);
        exec("echo hi > c.txt", &mut sh);
        exec("rm b.txt", &mut sh);
        assert_eq!(
            texts(&exec("ls", &mut sh)),
            vec!["projects/", "readme.txt", "a/", "c.txt"]
        );
    }

    #[test]
    fn test_ls_long() {
        let mut sh = shell();
        let result = exec("ls -l /etc", &mut sh);
        assert_eq!(result.output.len(), 2);
        match &result.output[0] {
            OutputLine::ListEntry {
                format: ListFormat::Long { permissions, .. },
                ..
            } => assert_eq!(permissions, "-rw-"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(is_error(&exec("ls /nope", &mut sh)));
    }

    #[test]
    fn test_rm_guards() {
        let mut sh = shell();
        assert_eq!(
            texts(&exec("rm /", &mut sh)),
            vec!["rm: refusing to remove '/'"]
        );
        assert!(is_error(&exec("rm ghost", &mut sh)));
        exec("mkdir empty", &mut sh);
        assert_eq!(
            texts(&exec("rm empty", &mut sh)),
            vec!["rm: cannot remove 'empty': Is a directory (use -r)"]
        );
        assert!(sh.fs.is_directory("/home/empty"));
        assert!(!is_error(&exec("rm -r empty", &mut sh)));
        assert!(sh.fs.lookup("/home/empty").is_none());
    }

    #[test]
    fn test_rm_moves_cwd_out_of_removed_subtree() {
        let mut sh = shell();
        exec("cd /home/projects", &mut sh);
        exec("rm -rf /home", &mut sh);
        assert_eq!(sh.cwd, "/");
        assert!(sh.fs.is_directory(&sh.cwd));
    }

    #[test]
    fn test_unknown_command() {
        let mut sh = shell();
        assert_eq!(
            texts(&exec("sudo make me a sandwich", &mut sh)),
            vec!["Command not found. Type \"help\" for available commands."]
        );
    }

    #[test]
    fn test_actions() {
        let mut sh = shell();
        assert_eq!(exec("clear", &mut sh).action, Some(Action::Clear));
        assert_eq!(exec("exit", &mut sh).action, Some(Action::Exit));
        assert_eq!(
            exec("curl example.com", &mut sh).action,
            Some(Action::Curl("https://example.com".into()))
        );
        assert_eq!(
            exec("ping example.com", &mut sh).action,
            Some(Action::Ping("example.com".into()))
        );
        assert!(is_error(&exec("curl", &mut sh)));
    }

    #[test]
    fn test_music_verbs() {
        let mut sh = shell();
        let mut p = player();
        let result = execute_command(Command::parse("play city"), &mut sh, &mut p, NOW);
        assert_eq!(
            texts(&result),
            vec!["▶ Playing: Midnight City [0:00 / 0:00]"]
        );
        assert!(p.is_playing());

        execute_command(Command::parse("pause"), &mut sh, &mut p, NOW);
        assert!(!p.is_playing());

        let result = execute_command(Command::parse("play 9"), &mut sh, &mut p, NOW);
        assert_eq!(texts(&result), vec!["play: no track numbered 9"]);

        let result = execute_command(Command::parse("list"), &mut sh, &mut p, NOW);
        assert_eq!(result.output.len(), 2);
    }

    #[test]
    fn test_pwd_and_static() {
        let mut sh = shell();
        assert_eq!(texts(&exec("pwd", &mut sh)), vec!["/home"]);
        assert!(!exec("help", &mut sh).output.is_empty());
    }
}
