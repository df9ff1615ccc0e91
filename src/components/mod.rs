//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing between the screens (main entry point)
//! - [`landing`] - Glyph rain and the choice of pills
//! - [`terminal`] - Simulated terminal session
//! - [`profile`] - Profile screen with tabs and arcade
//! - [`games`] - Canvas renderers for the arcade games
//! - [`player`] - Music player panel
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod games;
pub mod icons;
pub mod landing;
pub mod player;
pub mod profile;
pub mod router;
pub mod terminal;

pub use router::AppRouter;
