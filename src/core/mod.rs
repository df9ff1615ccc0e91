//! Core business logic for the site, independent of the UI.
//!
//! This module provides:
//! - [`VirtualFs`] copy-on-write session filesystem
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`SessionState`] terminal session state machine
//! - [`BootSequencer`] boot log sequencing
//! - [`probe`] `curl`/`ping` over an abstract [`probe::Network`]
//! - [`Player`] music player reducer
//! - [`effects`] decorative animation state
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
mod boot;
mod commands;
pub mod effects;
pub mod error;
mod filesystem;
pub mod player;
pub mod probe;
mod session;

pub use autocomplete::{AutocompleteResult, apply_completion, autocomplete, get_hint};
pub use boot::{BootSequencer, BootStage, BootStep};
pub use commands::{
    Action, Command, CommandResult, ContentTable, PathArg, Redirect, ShellState, execute_command,
};
pub use filesystem::VirtualFs;
pub use player::{Player, PlayerAction};
pub use session::{Effect, Phase, SessionState};
