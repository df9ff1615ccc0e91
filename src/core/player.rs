//! Music player state shared by the terminal and the profile screen.
//!
//! [`Player`] is plain data plus a reducer ([`Player::apply`]); the
//! `AudioHost` component mirrors it onto the single `<audio>` element.

use crate::core::error::PlayerError;
use crate::models::Song;
use crate::utils::format::format_playback;

/// How a track is picked by `play <selector>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// 1-based playlist position.
    Index(usize),
    /// Case-insensitive name fragment; the first match wins.
    Name(String),
}

impl Selector {
    /// Parse a `play` argument. Empty input means "resume".
    pub fn parse(arg: &str) -> Option<Self> {
        let arg = arg.trim();
        if arg.is_empty() {
            return None;
        }
        Some(match arg.parse::<usize>() {
            Ok(n) => Self::Index(n),
            Err(_) => Self::Name(arg.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerAction {
    Play(Option<Selector>),
    Pause,
    Toggle,
    Next,
    Prev,
    /// 0-based playlist position, selected and started.
    Select(usize),
    /// Seek to a position in seconds.
    Seek(f64),
    /// Position/duration reported by the audio element.
    Progress { position: f64, duration: f64 },
    /// The current track finished.
    Ended,
}

/// A pending seek for the audio element. `seq` distinguishes repeated seeks
/// to the same position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeekRequest {
    pub seq: u32,
    pub at: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    songs: Vec<Song>,
    current: usize,
    playing: bool,
    position: f64,
    duration: f64,
    seek: Option<SeekRequest>,
}

impl Player {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            songs,
            current: 0,
            playing: false,
            position: 0.0,
            duration: 0.0,
            seek: None,
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.songs.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn seek_request(&self) -> Option<SeekRequest> {
        self.seek
    }

    /// Apply an action. Errors leave the state untouched.
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), PlayerError> {
        match action {
            PlayerAction::Play(None) => {
                self.ensure_songs()?;
                self.playing = true;
            }
            PlayerAction::Play(Some(selector)) => {
                let index = self.find(&selector)?;
                self.select(index);
                self.playing = true;
            }
            PlayerAction::Pause => self.playing = false,
            PlayerAction::Toggle => {
                self.ensure_songs()?;
                self.playing = !self.playing;
            }
            PlayerAction::Next => {
                self.ensure_songs()?;
                self.select((self.current + 1) % self.songs.len());
            }
            PlayerAction::Prev => {
                self.ensure_songs()?;
                let len = self.songs.len();
                self.select((self.current + len - 1) % len);
            }
            PlayerAction::Select(index) => {
                if index >= self.songs.len() {
                    return Err(PlayerError::OutOfRange(index + 1));
                }
                self.select(index);
                self.playing = true;
            }
            PlayerAction::Seek(at) => {
                let at = at.clamp(0.0, self.duration.max(0.0));
                self.position = at;
                let seq = self.seek.map_or(0, |s| s.seq.wrapping_add(1));
                self.seek = Some(SeekRequest { seq, at });
            }
            PlayerAction::Progress { position, duration } => {
                self.position = finite_or_zero(position);
                self.duration = finite_or_zero(duration);
            }
            PlayerAction::Ended => {
                self.ensure_songs()?;
                self.select((self.current + 1) % self.songs.len());
                self.playing = true;
            }
        }
        Ok(())
    }

    /// One-line summary for `status`.
    pub fn status_line(&self) -> String {
        match self.current_song() {
            None => "No tracks loaded".to_string(),
            Some(song) => format!(
                "{} {} [{} / {}]",
                if self.playing { "▶ Playing:" } else { "⏸ Paused:" },
                song.name,
                format_playback(self.position),
                format_playback(self.duration),
            ),
        }
    }

    /// Numbered playlist for `list`, current track marked.
    pub fn list_lines(&self) -> Vec<String> {
        self.songs
            .iter()
            .enumerate()
            .map(|(i, song)| {
                let marker = if i == self.current { '▶' } else { ' ' };
                format!("{} {:>2}. {}", marker, i + 1, song.name)
            })
            .collect()
    }

    fn ensure_songs(&self) -> Result<(), PlayerError> {
        if self.songs.is_empty() {
            Err(PlayerError::EmptyPlaylist)
        } else {
            Ok(())
        }
    }

    fn find(&self, selector: &Selector) -> Result<usize, PlayerError> {
        self.ensure_songs()?;
        match selector {
            Selector::Index(n) => {
                if *n >= 1 && *n <= self.songs.len() {
                    Ok(n - 1)
                } else {
                    Err(PlayerError::OutOfRange(*n))
                }
            }
            Selector::Name(fragment) => {
                let needle = fragment.to_lowercase();
                self.songs
                    .iter()
                    .position(|s| s.name.to_lowercase().contains(&needle))
                    .ok_or_else(|| PlayerError::NoMatch(fragment.clone()))
            }
        }
    }

    fn select(&mut self, index: usize) {
        if index != self.current {
            self.position = 0.0;
            self.duration = 0.0;
        }
        self.current = index;
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str) -> Song {
        Song {
            name: name.to_string(),
            audio_src: format!("audio/{name}.mp3"),
            image_src: String::new(),
        }
    }

    fn player() -> Player {
        Player::new(vec![song("Nightcall"), song("Midnight City"), song("Kids")])
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::parse(""), None);
        assert_eq!(Selector::parse(" 3 "), Some(Selector::Index(3)));
        assert_eq!(Selector::parse("kids"), Some(Selector::Name("kids".into())));
    }

    #[test]
    fn test_play_by_index_and_name() {
        let mut p = player();
        p.apply(PlayerAction::Play(Some(Selector::Index(2)))).unwrap();
        assert_eq!(p.current_index(), 1);
        assert!(p.is_playing());

        p.apply(PlayerAction::Play(Some(Selector::Name("KID".into()))))
            .unwrap();
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn test_play_errors_leave_state() {
        let mut p = player();
        assert_eq!(
            p.apply(PlayerAction::Play(Some(Selector::Index(0)))),
            Err(PlayerError::OutOfRange(0))
        );
        assert_eq!(
            p.apply(PlayerAction::Play(Some(Selector::Name("zzz".into())))),
            Err(PlayerError::NoMatch("zzz".into()))
        );
        assert!(!p.is_playing());
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn test_next_prev_wrap_around() {
        let mut p = player();
        p.apply(PlayerAction::Prev).unwrap();
        assert_eq!(p.current_index(), 2);
        p.apply(PlayerAction::Next).unwrap();
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn test_ended_advances_and_keeps_playing() {
        let mut p = player();
        p.apply(PlayerAction::Select(2)).unwrap();
        p.apply(PlayerAction::Progress {
            position: 100.0,
            duration: 180.0,
        })
        .unwrap();
        p.apply(PlayerAction::Ended).unwrap();
        assert_eq!(p.current_index(), 0);
        assert!(p.is_playing());
        assert_eq!(p.position(), 0.0);
    }

    #[test]
    fn test_progress_sanitizes_nan() {
        let mut p = player();
        p.apply(PlayerAction::Progress {
            position: 1.0,
            duration: f64::NAN,
        })
        .unwrap();
        assert_eq!(p.duration(), 0.0);
    }

    #[test]
    fn test_seek_is_clamped_and_sequenced() {
        let mut p = player();
        p.apply(PlayerAction::Progress {
            position: 0.0,
            duration: 60.0,
        })
        .unwrap();
        p.apply(PlayerAction::Seek(90.0)).unwrap();
        let first = p.seek_request().unwrap();
        assert_eq!(first.at, 60.0);
        p.apply(PlayerAction::Seek(90.0)).unwrap();
        assert_ne!(p.seek_request().unwrap().seq, first.seq);
    }

    #[test]
    fn test_empty_playlist() {
        let mut p = Player::new(vec![]);
        assert_eq!(p.apply(PlayerAction::Next), Err(PlayerError::EmptyPlaylist));
        assert_eq!(p.status_line(), "No tracks loaded");
    }

    #[test]
    fn test_status_and_list() {
        let mut p = player();
        p.apply(PlayerAction::Select(1)).unwrap();
        p.apply(PlayerAction::Progress {
            position: 62.0,
            duration: 243.5,
        })
        .unwrap();
        assert_eq!(p.status_line(), "▶ Playing: Midnight City [1:02 / 4:03]");
        let lines = p.list_lines();
        assert_eq!(lines[1], "▶  2. Midnight City");
        assert_eq!(lines[0], "   1. Nightcall");
    }
}
