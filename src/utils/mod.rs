//! Utility modules for web, DOM, formatting and logging.
//!
//! Provides:
//! - [`BrowserNetwork`] - `fetch`-backed network for the probes
//! - [`race_with_timeout`] - Promise racing with a timeout
//! - [`format`] - Sizes, dates, elapsed times and playback positions
//! - [`time`] - Wall clock and local time
//! - [`logging`] - `tracing` subscriber writing to the browser console

pub mod dom;
mod fetch;
pub mod format;
pub mod logging;
pub mod time;
mod url;

pub use fetch::{BrowserNetwork, RaceResult, race_with_timeout};
pub use format::{format_elapsed_ms, format_playback};
pub use time::{format_local_date, now_ms};
pub use url::{extract_host, normalize_probe_url};
