//! Playlist entries from the compiled-in song manifest.

use serde::{Deserialize, Serialize};

const SONG_MANIFEST: &str = include_str!("../../assets/songs.json");

/// A playable track with its cover art.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub name: String,
    pub audio_src: String,
    /// Empty when the track has no cover image.
    #[serde(default)]
    pub image_src: String,
}

impl Song {
    /// Parses a manifest document (ordered JSON array).
    pub fn parse_manifest(json: &str) -> Result<Vec<Song>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The playlist shipped with the site. A broken manifest yields an empty playlist.
    pub fn embedded_playlist() -> Vec<Song> {
        match Self::parse_manifest(SONG_MANIFEST) {
            Ok(songs) => songs,
            Err(e) => {
                tracing::warn!(error = %e, "song manifest failed to parse");
                Vec::new()
            }
        }
    }

    pub fn has_cover(&self) -> bool {
        !self.image_src.is_empty()
    }
}
