//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! audio host that keeps music playing across screens.

use leptos::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::components::AppRouter;
use crate::core::{Player, PlayerAction};
use crate::models::{Route, Song};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `expect_context::<AppContext>()`.
///
/// Terminal sessions are deliberately absent: each mounted terminal owns
/// its own session and discards it on unmount.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen, mirrored from the URL hash.
    pub route: RwSignal<Route>,

    /// Music player state, shared by the terminal and the profile screen.
    pub player: RwSignal<Player>,
}

impl AppContext {
    /// Creates the context with the route from the URL and the embedded playlist.
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::current()),
            player: RwSignal::new(Player::new(Song::embedded_playlist())),
        }
    }

    /// Switch screens and record the move in browser history.
    pub fn navigate(&self, route: Route) {
        route.push();
        self.route.set(route);
    }

    /// Apply a player action; rejected actions are logged and ignored.
    pub fn dispatch(&self, action: PlayerAction) {
        self.player.update(|player| {
            if let Err(e) = player.apply(action) {
                tracing::warn!(error = %e, "player action rejected");
            }
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Audio Host
// ============================================================================

/// The single `<audio>` element, bound to [`AppContext::player`].
#[component]
fn AudioHost() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    let src = Memo::new(move |_| {
        ctx.player
            .with(|p| p.current_song().map(|song| song.audio_src.clone()))
    });
    let playing = Memo::new(move |_| ctx.player.with(Player::is_playing));
    let seek = Memo::new(move |_| ctx.player.with(Player::seek_request));

    // Source switching and play/pause
    Effect::new(move || {
        let src = src.get();
        let playing = playing.get();
        let Some(audio) = audio_ref.get() else { return };

        if audio.get_attribute("src") != src {
            match &src {
                Some(src) => audio.set_src(src),
                None => {
                    let _ = audio.remove_attribute("src");
                }
            }
        }

        if !playing || src.is_none() {
            let _ = audio.pause();
            return;
        }
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    tracing::warn!(error = ?e, "playback refused");
                    ctx.dispatch(PlayerAction::Pause);
                }
            }),
            Err(e) => tracing::warn!(error = ?e, "playback failed to start"),
        }
    });

    Effect::new(move || {
        if let Some(request) = seek.get()
            && let Some(audio) = audio_ref.get_untracked()
        {
            audio.set_current_time(request.at);
        }
    });

    let report_progress = move || {
        if let Some(audio) = audio_ref.get_untracked() {
            ctx.dispatch(PlayerAction::Progress {
                position: audio.current_time(),
                duration: audio.duration(),
            });
        }
    };

    view! {
        <audio
            node_ref=audio_ref
            preload="metadata"
            on:timeupdate=move |_| report_progress()
            on:loadedmetadata=move |_| report_progress()
            on:ended=move |_| ctx.dispatch(PlayerAction::Ended)
        />
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the screens in an ErrorBoundary for graceful error handling
/// - Hosts the shared audio element outside the routed screens
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                    <p class=css::fallbackHint>"Reload the page to start over."</p>
                    <ul class=css::fallbackErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::fallbackButton
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
        <AudioHost />
    }
}
