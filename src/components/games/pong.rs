use leptos::{ev, prelude::*};

use super::{clear, context_2d, css, fill, text};
use crate::config::GAME_TICK_MS;
use crate::games::Pong;
use crate::games::pong::{HEIGHT, WIDTH};
use crate::utils::dom::use_interval;

const CANVAS_WIDTH: u32 = WIDTH as u32;
const CANVAS_HEIGHT: u32 = HEIGHT as u32;

fn draw(canvas: &web_sys::HtmlCanvasElement, game: &Pong) {
    let Some(ctx) = context_2d(canvas) else { return };
    clear(&ctx, WIDTH, HEIGHT);

    // Center line
    ctx.set_fill_style_str("#333");
    let mut y = 0.0;
    while y < HEIGHT {
        ctx.fill_rect(WIDTH / 2.0 - 1.0, y, 2.0, 10.0);
        y += 20.0;
    }

    fill(&ctx, &game.player_paddle(), "#00ffff");
    fill(&ctx, &game.ai_paddle(), "#ff00ff");
    fill(&ctx, &game.ball, "#ffff00");

    let font = "24px monospace";
    text(&ctx, &game.player_score.to_string(), WIDTH / 4.0, 40.0, font, "#00ffff");
    text(&ctx, &game.ai_score.to_string(), WIDTH * 3.0 / 4.0, 40.0, font, "#ff00ff");

    if !game.running {
        text(&ctx, "CLICK TO START", WIDTH / 2.0, HEIGHT / 2.0 + 40.0, "16px monospace", "#fff");
    }
}

#[component]
pub fn PongCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let game = StoredValue::new(Pong::default());

    use_interval(GAME_TICK_MS, move || {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        game.try_update_value(|g| {
            g.tick(&mut rand::thread_rng());
            draw(&canvas, g);
        });
    });

    let on_mouse_move = move |e: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let bounds = canvas.get_bounding_client_rect();
        if bounds.height() <= 0.0 {
            return;
        }
        // Canvas may be scaled by CSS
        let y = (f64::from(e.client_y()) - bounds.top()) * HEIGHT / bounds.height();
        game.update_value(|g| g.track_pointer(y));
    };

    let on_click = move |_| {
        game.update_value(|g| {
            g.running = !g.running;
            tracing::debug!(running = g.running, "pong toggled");
        });
    };

    let on_reset = move |_| game.update_value(Pong::reset);

    view! {
        <canvas
            node_ref=canvas_ref
            class=css::canvas
            width=CANVAS_WIDTH
            height=CANVAS_HEIGHT
            on:mousemove=on_mouse_move
            on:click=on_click
        />
        <div class=css::controls>
            <button class=css::button on:click=on_reset>"RESET"</button>
        </div>
    }
}
