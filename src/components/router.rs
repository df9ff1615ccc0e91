//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the screen is derived from `#/path`
//! - **Screens mount fresh**: leaving the terminal discards its session
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::components::landing::Landing;
use crate::components::profile::Profile;
use crate::components::terminal::Terminal;
use crate::models::Route;

/// Main application router.
///
/// - `#/` → Landing
/// - `#/terminal` → Terminal
/// - `#/profile` → Profile
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let handle = window_event_listener(ev::hashchange, move |_| {
        ctx.route.set(Route::current());
    });
    on_cleanup(move || handle.remove());

    // Re-setting the same route must not remount the screen
    let route = Memo::new(move |_| ctx.route.get());

    Effect::new(move || {
        tracing::debug!(route = ?route.get(), "screen changed");
    });

    move || match route.get() {
        Route::Landing => view! { <Landing /> }.into_any(),
        Route::Terminal => view! { <Terminal /> }.into_any(),
        Route::Profile => view! { <Profile /> }.into_any(),
    }
}
