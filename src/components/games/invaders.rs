use leptos::{ev, prelude::*};

use super::{clear, context_2d, css, fill, text};
use crate::config::GAME_TICK_MS;
use crate::games::invaders::{HEIGHT, WIDTH};
use crate::games::{Controls, Invaders, InvadersPhase};
use crate::utils::dom::use_interval;

const CANVAS_WIDTH: u32 = WIDTH as u32;
const CANVAS_HEIGHT: u32 = HEIGHT as u32;

fn draw(canvas: &web_sys::HtmlCanvasElement, game: &Invaders) {
    let Some(ctx) = context_2d(canvas) else { return };
    clear(&ctx, WIDTH, HEIGHT);

    fill(&ctx, &game.player(), "#00ff00");
    for enemy in &game.enemies {
        fill(&ctx, enemy, "#ff4444");
    }
    for bullet in &game.player_bullets {
        fill(&ctx, bullet, "#ffff00");
    }
    for bullet in &game.enemy_bullets {
        fill(&ctx, bullet, "#ff00ff");
    }

    ctx.set_font("14px monospace");
    ctx.set_fill_style_str("#fff");
    ctx.set_text_align("left");
    let hud = format!("SCORE {}   LIVES {}   LEVEL {}", game.score, game.lives, game.level);
    let _ = ctx.fill_text(&hud, 10.0, 20.0);

    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let big = "28px monospace";
    let small = "14px monospace";
    match game.phase {
        InvadersPhase::LevelStart { .. } => {
            text(&ctx, &format!("LEVEL {}", game.level), cx, cy, big, "#00ffff");
        }
        InvadersPhase::LevelComplete => {
            text(&ctx, "LEVEL COMPLETE", cx, cy, big, "#00ff00");
            text(&ctx, "PRESS ENTER", cx, cy + 30.0, small, "#fff");
        }
        InvadersPhase::GameOver => {
            text(&ctx, "GAME OVER", cx, cy, big, "#ff4444");
            text(&ctx, "PRESS ENTER TO RESTART", cx, cy + 30.0, small, "#fff");
        }
        InvadersPhase::Playing => {}
    }
    if game.paused {
        text(&ctx, "PAUSED", cx, cy - 40.0, big, "#ffff00");
    }
}

#[component]
pub fn InvadersCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let game = StoredValue::new(Invaders::default());
    let controls = StoredValue::new(Controls::default());

    use_interval(GAME_TICK_MS, move || {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let held = controls.try_get_value().unwrap_or_default();
        game.try_update_value(|g| {
            g.tick(held, &mut rand::thread_rng());
            draw(&canvas, g);
        });
    });

    let keydown = window_event_listener(ev::keydown, move |e| {
        let handled = match e.key().as_str() {
            "ArrowLeft" => {
                controls.update_value(|c| c.left = true);
                true
            }
            "ArrowRight" => {
                controls.update_value(|c| c.right = true);
                true
            }
            " " => {
                game.update_value(Invaders::fire);
                true
            }
            "p" | "P" => {
                game.update_value(Invaders::toggle_pause);
                true
            }
            "Enter" => {
                game.update_value(Invaders::advance);
                true
            }
            _ => false,
        };
        if handled {
            e.prevent_default();
        }
    });
    let keyup = window_event_listener(ev::keyup, move |e| match e.key().as_str() {
        "ArrowLeft" => controls.update_value(|c| c.left = false),
        "ArrowRight" => controls.update_value(|c| c.right = false),
        _ => {}
    });
    on_cleanup(move || {
        keydown.remove();
        keyup.remove();
    });

    view! { <canvas node_ref=canvas_ref class=css::canvas width=CANVAS_WIDTH height=CANVAS_HEIGHT /> }
}
