//! Arcade overlay and canvas renderers for the games in `crate::games`.

mod invaders;
mod pong;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::icons as ic;
use crate::games::Rect;

use invaders::InvadersCanvas;
use pong::PongCanvas;

stylance::import_crate_style!(css, "src/components/games/games.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game {
    Pong,
    Invaders,
}

impl Game {
    pub const ALL: [Game; 2] = [Self::Pong, Self::Invaders];

    pub fn title(self) -> &'static str {
        match self {
            Self::Pong => "PONG.EXE",
            Self::Invaders => "INVADERS.EXE",
        }
    }

    fn help(self) -> &'static str {
        match self {
            Self::Pong => "Mouse moves the paddle. Click to start or pause.",
            Self::Invaders => "←/→ move, SPACE fires, P pauses, ENTER continues.",
        }
    }
}

/// Modal window hosting one game. Escape closes it.
#[component]
pub fn GameOverlay(game: Game, on_close: Callback<()>) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());
    tracing::debug!(game = game.title(), "arcade opened");

    view! {
        <div class=css::overlay>
            <div class=css::window>
                <header class=css::titleBar>
                    <span>{game.title()}</span>
                    <button class=css::close on:click=move |_| on_close.run(())>
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                {match game {
                    Game::Pong => view! { <PongCanvas /> }.into_any(),
                    Game::Invaders => view! { <InvadersCanvas /> }.into_any(),
                }}
                <footer class=css::help>{game.help()}</footer>
            </div>
        </div>
    }
}

// ============================================================================
// Canvas helpers
// ============================================================================

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn fill(ctx: &CanvasRenderingContext2d, rect: &Rect, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
}

fn text(ctx: &CanvasRenderingContext2d, s: &str, x: f64, y: f64, font: &str, color: &str) {
    ctx.set_font(font);
    ctx.set_fill_style_str(color);
    ctx.set_text_align("center");
    let _ = ctx.fill_text(s, x, y);
}
