//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuGamepad2 as Arcade, LuHouse as Home, LuMusic as Music, LuPause as Pause,
        LuPlay as Play, LuSkipBack as Prev, LuSkipForward as Next, LuTerminal as Terminal,
        LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsController as Arcade, BsHouseFill as Home, BsMusicNoteBeamed as Music,
        BsPauseFill as Pause, BsPlayFill as Play, BsPerson as User,
        BsSkipBackwardFill as Prev, BsSkipForwardFill as Next, BsTerminal as Terminal,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(TERMINAL, Terminal);
themed_icon!(USER, User);
themed_icon!(CLOSE, Close);
themed_icon!(ARCADE, Arcade);
themed_icon!(MUSIC, Music);
themed_icon!(PLAY, Play);
themed_icon!(PAUSE, Pause);
themed_icon!(NEXT, Next);
themed_icon!(PREV, Prev);
