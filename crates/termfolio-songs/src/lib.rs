//! Song manifest generation.
//!
//! Pairs every `.mp3` in an audio directory with the cover image that
//! shares its base name and renders the ordered JSON array the site
//! compiles in.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Cover image extensions, in order of preference.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

const AUDIO_EXTENSION: &str = ".mp3";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("cannot read {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// One manifest record; field names match what the site deserializes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub name: String,
    pub audio_src: String,
    /// Empty when no cover image was found.
    pub image_src: String,
}

/// Build manifest entries from the file names of one directory.
///
/// `prefix` is the URL directory the files are served from (`audio`).
/// Entries are sorted by name.
pub fn pair_tracks<S: AsRef<str>>(files: &[S], prefix: &str) -> Vec<ManifestEntry> {
    let url = |file: &str| {
        if prefix.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", prefix.trim_end_matches('/'), file)
        }
    };
    let has_file = |name: &str| files.iter().any(|f| f.as_ref() == name);

    let mut entries: Vec<ManifestEntry> = files
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|file| {
            let base = file.strip_suffix(AUDIO_EXTENSION)?;
            let image_src = IMAGE_EXTENSIONS
                .iter()
                .map(|ext| format!("{base}{ext}"))
                .find(|image| has_file(image))
                .map(|image| url(&image))
                .unwrap_or_default();
            Some(ManifestEntry {
                name: base.to_string(),
                audio_src: url(file),
                image_src,
            })
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// File names directly inside `dir`. Non-UTF-8 names are skipped.
pub fn scan_dir(dir: &Path) -> Result<Vec<String>, ManifestError> {
    let read_err = |source| ManifestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    Ok(names)
}

/// Pretty JSON with a trailing newline.
pub fn render(entries: &[ManifestEntry]) -> Result<String, ManifestError> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    Ok(json)
}

/// Scan `dir` and write the manifest to `output`. Returns the entries written.
pub fn generate(
    dir: &Path,
    prefix: &str,
    output: &Path,
) -> Result<Vec<ManifestEntry>, ManifestError> {
    let entries = pair_tracks(&scan_dir(dir)?, prefix);
    if entries.is_empty() {
        tracing::warn!(dir = %dir.display(), "no .mp3 files found");
    }

    fs::write(output, render(&entries)?).map_err(|source| ManifestError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(count = entries.len(), output = %output.display(), "manifest written");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_cover_by_base_name() {
        let files = ["b.mp3", "b.png", "a.mp3", "a.jpg", "notes.txt"];
        let entries = pair_tracks(&files, "audio");
        assert_eq!(
            entries,
            vec![
                ManifestEntry {
                    name: "a".into(),
                    audio_src: "audio/a.mp3".into(),
                    image_src: "audio/a.jpg".into(),
                },
                ManifestEntry {
                    name: "b".into(),
                    audio_src: "audio/b.mp3".into(),
                    image_src: "audio/b.png".into(),
                },
            ]
        );
    }

    #[test]
    fn test_first_extension_wins() {
        let files = ["song.mp3", "song.webp", "song.jpeg"];
        let entries = pair_tracks(&files, "audio");
        assert_eq!(entries[0].image_src, "audio/song.jpeg");
    }

    #[test]
    fn test_missing_cover_is_empty() {
        let entries = pair_tracks(&["lonely.mp3"], "audio/");
        assert_eq!(entries[0].audio_src, "audio/lonely.mp3");
        assert_eq!(entries[0].image_src, "");
    }

    #[test]
    fn test_ignores_other_audio_formats() {
        assert!(pair_tracks(&["a.wav", "a.jpg", "b.MP3"], "audio").is_empty());
    }

    #[test]
    fn test_render_uses_camel_case() {
        let json = render(&pair_tracks(&["x.mp3"], "")).unwrap();
        assert!(json.contains("\"audioSrc\": \"x.mp3\""));
        assert!(json.contains("\"imageSrc\": \"\""));
        assert!(json.ends_with("]\n"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = std::env::temp_dir().join(format!("termfolio-songs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("t.mp3"), b"").unwrap();
        fs::write(dir.join("t.png"), b"").unwrap();
        let output = dir.join("songs.json");

        let entries = generate(&dir, "audio", &output).unwrap();
        assert_eq!(entries.len(), 1);

        let written: Vec<ManifestEntry> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, entries);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir_is_error() {
        let err = scan_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, ManifestError::ReadDir { .. }));
    }
}
