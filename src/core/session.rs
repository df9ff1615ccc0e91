//! Terminal session state machine.
//!
//! A session moves `Booting → AwaitingUsername → Interactive → Exited`.
//! [`SessionState::submit`] is the reducer for submitted lines: it runs the
//! command synchronously and hands anything asynchronous back to the host
//! as an [`Effect`].

use crate::config::{
    APP_VERSION, ASCII_BANNER, DEFAULT_USERNAME, HOSTNAME, MAX_COMMAND_HISTORY,
};
use crate::core::VirtualFs;
use crate::core::commands::{Action, Command, ShellState, execute_command};
use crate::core::player::Player;
use crate::models::{EchoedInput, EntryId, OutputLine, TranscriptEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Booting,
    AwaitingUsername,
    Interactive,
    Exited,
}

/// Work the host performs after a submitted line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `url` and resolve `entry` with the report.
    Curl { entry: EntryId, url: String },
    /// Probe `host` and keep `entry` updated with each attempt.
    Ping { entry: EntryId, host: String },
    /// Play the closing cue, then leave the terminal.
    Exit,
}

/// One mounted terminal session.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub phase: Phase,
    pub username: String,
    pub shell: ShellState,
    pub transcript: Vec<TranscriptEntry>,
    command_history: Vec<String>,
    history_index: Option<usize>,
}

impl SessionState {
    pub fn new(now: u64) -> Self {
        Self {
            phase: Phase::Booting,
            username: String::new(),
            shell: ShellState::new(VirtualFs::seeded(now)),
            transcript: Vec::new(),
            command_history: Vec::new(),
            history_index: None,
        }
    }

    /// Booting → AwaitingUsername. No-op in any other phase.
    pub fn finish_boot(&mut self) {
        if self.phase == Phase::Booting {
            self.phase = Phase::AwaitingUsername;
        }
    }

    /// Gets the current prompt string for display.
    ///
    /// Format: `{username}@{hostname}:{cwd}`
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}", self.username, HOSTNAME, self.shell.cwd)
    }

    /// Handle one submitted line.
    ///
    /// Lines submitted while booting or after exit are ignored.
    pub fn submit(&mut self, input: &str, player: &mut Player, now: u64) -> Option<Effect> {
        match self.phase {
            Phase::Booting | Phase::Exited => None,
            Phase::AwaitingUsername => {
                self.login(input);
                None
            }
            Phase::Interactive => self.run_line(input.trim(), player, now),
        }
    }

    fn login(&mut self, input: &str) {
        let name = input.trim();
        self.username = if name.is_empty() {
            DEFAULT_USERNAME.to_string()
        } else {
            name.to_string()
        };
        self.phase = Phase::Interactive;
        self.transcript = vec![self.header()];
        tracing::info!(username = %self.username, "session started");
    }

    fn run_line(&mut self, line: &str, player: &mut Player, now: u64) -> Option<Effect> {
        self.add_to_command_history(line);
        let echoed = EchoedInput {
            prompt: self.prompt(),
            line: line.to_string(),
        };

        let result = execute_command(Command::parse(line), &mut self.shell, player, now);
        match result.action {
            None => {
                self.transcript
                    .push(TranscriptEntry::new(Some(echoed), result.output));
                None
            }
            Some(Action::Clear) => {
                self.transcript = vec![self.header()];
                None
            }
            Some(Action::Curl(url)) => {
                let placeholder = vec![OutputLine::info(format!("Making request to {url}..."))];
                let entry = self.begin_async_entry(Some(echoed), placeholder);
                Some(Effect::Curl { entry, url })
            }
            Some(Action::Ping(host)) => {
                let placeholder = vec![OutputLine::info(format!("PING {host} ..."))];
                let entry = self.begin_async_entry(Some(echoed), placeholder);
                Some(Effect::Ping { entry, host })
            }
            Some(Action::Exit) => {
                let farewell = vec![
                    OutputLine::info("Shutting down..."),
                    OutputLine::text(format!("Goodbye, {}.", self.username)),
                ];
                self.transcript
                    .push(TranscriptEntry::new(Some(echoed), farewell));
                self.phase = Phase::Exited;
                tracing::info!("session exited");
                Some(Effect::Exit)
            }
        }
    }

    /// Banner entry shown after login and after `clear`.
    fn header(&self) -> TranscriptEntry {
        let mut lines: Vec<OutputLine> = ASCII_BANNER.lines().map(OutputLine::ascii).collect();
        lines.push(OutputLine::empty());
        lines.push(OutputLine::success(format!(
            "Welcome to {} v{}, {}.",
            HOSTNAME, APP_VERSION, self.username
        )));
        lines.push(OutputLine::text(
            "Type \"help\" for available commands.",
        ));
        lines.push(OutputLine::empty());
        TranscriptEntry::new(None, lines)
    }

    // =========================================================================
    // Two-phase entries
    // =========================================================================

    /// Append an entry whose output will be filled in later.
    pub fn begin_async_entry(
        &mut self,
        input: Option<EchoedInput>,
        placeholder: Vec<OutputLine>,
    ) -> EntryId {
        let entry = TranscriptEntry::new(input, placeholder);
        let id = entry.id;
        self.transcript.push(entry);
        id
    }

    /// Replace the output of entry `id` in place.
    ///
    /// Returns `false` and changes nothing if the entry is gone (e.g. after
    /// `clear`).
    pub fn resolve_async_entry(&mut self, id: EntryId, lines: Vec<OutputLine>) -> bool {
        match self.transcript.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.output = lines;
                entry.revision = entry.revision.wrapping_add(1);
                true
            }
            None => {
                tracing::debug!(?id, "dropping stale async result");
                false
            }
        }
    }

    // =========================================================================
    // Command history
    // =========================================================================

    pub fn add_to_command_history(&mut self, cmd: &str) {
        if !cmd.trim().is_empty() && self.command_history.last().map(|s| s.as_str()) != Some(cmd)
        {
            self.command_history.push(cmd.to_string());
            // Limit command history size
            if self.command_history.len() > MAX_COMMAND_HISTORY {
                self.command_history.remove(0);
            }
        }
        self.history_index = None;
    }

    /// Step through history: negative is older, positive is newer.
    ///
    /// Returns `None` when stepping past the newest entry.
    pub fn navigate_history(&mut self, direction: i32) -> Option<String> {
        let history = &self.command_history;
        if history.is_empty() {
            return None;
        }

        let current_index = self.history_index;
        let new_index = match current_index {
            None if direction < 0 => Some(history.len() - 1),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < history.len() - 1 => Some(i + 1),
            Some(_) if direction > 0 => None,
            _ => current_index,
        };

        self.history_index = new_index;
        new_index.map(|i| history[i].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    fn interactive(name: &str) -> (SessionState, Player) {
        let mut session = SessionState::new(NOW);
        let mut player = Player::new(vec![]);
        session.finish_boot();
        session.submit(name, &mut player, NOW);
        (session, player)
    }

    #[test]
    fn test_phase_transitions() {
        let mut session = SessionState::new(NOW);
        let mut player = Player::new(vec![]);
        assert_eq!(session.phase, Phase::Booting);

        assert_eq!(session.submit("ls", &mut player, NOW), None);
        assert!(session.transcript.is_empty());

        session.finish_boot();
        assert_eq!(session.phase, Phase::AwaitingUsername);
        session.submit("neo", &mut player, NOW);
        assert_eq!(session.phase, Phase::Interactive);
        assert_eq!(session.prompt(), "neo@termfolio:/home");
    }

    #[test]
    fn test_username_defaults_to_guest() {
        let (session, _) = interactive("   ");
        assert_eq!(session.username, "guest");
        assert_eq!(session.transcript.len(), 1);
        assert!(session.transcript[0].input.is_none());
    }

    #[test]
    fn test_submit_records_prompt_at_submission() {
        let (mut session, mut player) = interactive("neo");
        session.submit("cd /tmp", &mut player, NOW);
        session.submit("pwd", &mut player, NOW);
        let last = session.transcript.last().unwrap();
        let input = last.input.as_ref().unwrap();
        assert_eq!(input.prompt, "neo@termfolio:/tmp");
        assert_eq!(input.line, "pwd");
        assert_eq!(last.output, vec![OutputLine::text("/tmp")]);
    }

    #[test]
    fn test_clear_keeps_only_banner() {
        let (mut session, mut player) = interactive("neo");
        let banner = session.transcript[0].output.clone();
        session.submit("help", &mut player, NOW);
        session.submit("clear", &mut player, NOW);
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].output, banner);
    }

    #[test]
    fn test_curl_placeholder_then_resolve() {
        let (mut session, mut player) = interactive("neo");
        let Some(Effect::Curl { entry, url }) =
            session.submit("curl example.com", &mut player, NOW)
        else {
            panic!("expected curl effect");
        };
        assert_eq!(url, "https://example.com");
        let last = session.transcript.last().unwrap();
        assert_eq!(
            last.output,
            vec![OutputLine::info("Making request to https://example.com...")]
        );

        session.submit("pwd", &mut player, NOW);
        assert!(session.resolve_async_entry(entry, vec![OutputLine::text("HTTP 200 OK")]));
        let resolved = session.transcript.iter().find(|e| e.id == entry).unwrap();
        assert_eq!(resolved.revision, 1);
        // Placeholder keeps its position ahead of later entries.
        assert_eq!(session.transcript.last().unwrap().output, vec![OutputLine::text("/home")]);
    }

    #[test]
    fn test_stale_resolution_is_dropped() {
        let (mut session, mut player) = interactive("neo");
        let Some(Effect::Ping { entry, .. }) = session.submit("ping example.com", &mut player, NOW)
        else {
            panic!("expected ping effect");
        };
        session.submit("clear", &mut player, NOW);
        let before = session.transcript.clone();
        assert!(!session.resolve_async_entry(entry, vec![OutputLine::text("late")]));
        assert_eq!(session.transcript, before);
    }

    #[test]
    fn test_exit_ends_session() {
        let (mut session, mut player) = interactive("neo");
        assert_eq!(session.submit("exit", &mut player, NOW), Some(Effect::Exit));
        assert_eq!(session.phase, Phase::Exited);
        let len = session.transcript.len();
        assert_eq!(session.submit("help", &mut player, NOW), None);
        assert_eq!(session.transcript.len(), len);
    }

    #[test]
    fn test_filesystem_is_per_session() {
        let (mut a, mut player) = interactive("a");
        let (b, _) = interactive("b");
        a.submit("mkdir notes", &mut player, NOW);
        assert!(a.shell.fs.is_directory("/home/notes"));
        assert!(!b.shell.fs.is_directory("/home/notes"));
    }

    #[test]
    fn test_command_history() {
        let (mut session, mut player) = interactive("neo");
        session.submit("ls", &mut player, NOW);
        session.submit("ls", &mut player, NOW);
        session.submit("pwd", &mut player, NOW);
        assert_eq!(session.navigate_history(-1), Some("pwd".to_string()));
        assert_eq!(session.navigate_history(-1), Some("ls".to_string()));
        assert_eq!(session.navigate_history(-1), Some("ls".to_string()));
        assert_eq!(session.navigate_history(1), Some("pwd".to_string()));
        assert_eq!(session.navigate_history(1), None);
    }
}
