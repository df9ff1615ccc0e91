//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner shown at the top of every terminal session.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// ASCII portrait on the landing screen.
pub const ASCII_PORTRAIT: &str = include_str!("../assets/text/portrait.txt");

/// Landing screen quote, typed under the portrait.
pub const LANDING_QUOTE: &str = include_str!("../assets/text/morpheus.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Host name shown in the prompt (`user@host:/path`).
pub const HOSTNAME: &str = "termfolio";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Owner of the portfolio, shown on the profile screen.
pub const OWNER_NAME: &str = "TECHNOCRAT";

/// Username used when the login prompt is left empty.
pub const DEFAULT_USERNAME: &str = "guest";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Session filesystem layout.
pub mod filesystem {
    /// Home directory; `cd` with no argument and `~` resolve here.
    pub const HOME_DIR: &str = "/home";

    /// Directories created at session start, parents first.
    pub const SEED_DIRECTORIES: &[&str] = &["/home", "/home/projects", "/tmp", "/etc"];

    /// Files created at session start.
    pub const SEED_FILES: &[(&str, &str)] = &[
        ("/home/readme.txt", include_str!("../assets/text/readme.txt")),
        ("/etc/hostname", "termfolio\n"),
        ("/etc/motd", include_str!("../assets/text/motd.txt")),
    ];
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Limits for the `curl` and `ping` probes.
pub mod network {
    /// Fetch request timeout in milliseconds.
    pub const FETCH_TIMEOUT_MS: i32 = 10000;

    /// Response bodies longer than this many characters are truncated.
    pub const CURL_BODY_LIMIT: usize = 1000;

    /// Attempts per `ping`.
    pub const PING_COUNT: usize = 4;

    /// Pause between ping attempts.
    pub const PING_INTERVAL_MS: u32 = 500;
}

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Boot sequence stages and timing.
pub mod boot {
    use crate::core::BootStage;

    /// Delay after a static stage is revealed.
    pub const STATIC_STAGE_DELAY_MS: u32 = 180;

    /// Steps in a progress bar.
    pub const PROGRESS_STEPS: u8 = 10;

    pub const STAGES: &[BootStage] = &[
        BootStage::line("UNIX System V Release 3.2 (termfolio)"),
        BootStage::line("Copyright (c) 1984 AT&T. All Rights Reserved."),
        BootStage::line("Memory check ............ 640K OK"),
        BootStage::progress("Loading kernel modules", 250),
        BootStage::progress("Mounting virtual filesystem", 300),
        BootStage::progress("Configuring network interfaces", 400),
        BootStage::progress("Starting audio subsystem", 350),
        BootStage::line("All systems nominal."),
    ];
}

/// Closing cue played by `exit`.
pub mod exit {
    pub const CUE_SRC: &str = "audio/shutdown.mp3";

    /// Navigation delay when the cue cannot be played.
    pub const FALLBACK_MS: u32 = 1500;

    /// Upper bound on waiting for the cue to end.
    pub const CUE_MAX_MS: i32 = 8000;
}

// =============================================================================
// Game Configuration
// =============================================================================

/// Fixed update interval for both arcade games (~60 Hz).
pub const GAME_TICK_MS: u64 = 16;

// =============================================================================
// Decorative Timers
// =============================================================================

/// Periods of the landing and profile screen animations.
pub mod effects {
    /// Glyph rain shift period.
    pub const RAIN_TICK_MS: u64 = 70;
    /// Width of one rain column in pixels.
    pub const RAIN_COLUMN_WIDTH: f64 = 20.0;
    /// Longest glyph trail per column.
    pub const RAIN_MAX_TRAIL: usize = 20;
    /// Delay before the pills appear.
    pub const PILL_REVEAL_MS: u64 = 2500;
    /// Profile clock refresh.
    pub const CLOCK_TICK_MS: u64 = 1000;
    /// Name glitch period and how long the glitched text stays.
    pub const GLITCH_PERIOD_MS: u64 = 3000;
    pub const GLITCH_HOLD_MS: u64 = 100;
    pub const GLITCH_PROBABILITY: f64 = 0.2;
    /// Status rotation period.
    pub const STATUS_PERIOD_MS: u64 = 2000;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
