use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "termfolio-songs")]
#[command(about = "Regenerate the song manifest from an audio directory")]
struct Cli {
    /// Directory holding the .mp3 files and their cover images
    #[arg(short, long, default_value = "assets/audio")]
    audio_dir: PathBuf,

    /// Manifest file to write
    #[arg(short, long, default_value = "assets/songs.json")]
    output: PathBuf,

    /// URL directory the files are served from
    #[arg(short, long, default_value = "audio")]
    prefix: String,

    /// Print the manifest instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Log every track
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), termfolio_songs::ManifestError> {
    let entries = if cli.dry_run {
        let files = termfolio_songs::scan_dir(&cli.audio_dir)?;
        let entries = termfolio_songs::pair_tracks(&files, &cli.prefix);
        print!("{}", termfolio_songs::render(&entries)?);
        entries
    } else {
        termfolio_songs::generate(&cli.audio_dir, &cli.prefix, &cli.output)?
    };

    for (i, entry) in entries.iter().enumerate() {
        tracing::debug!("{}. {}", i + 1, entry.name);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .without_time()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
