//! Landing screen: glyph rain, portrait and the choice of pills.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::effects::{PILL_REVEAL_MS, RAIN_COLUMN_WIDTH, RAIN_MAX_TRAIL, RAIN_TICK_MS};
use crate::config::{ASCII_PORTRAIT, LANDING_QUOTE};
use crate::core::effects::MatrixRain;
use crate::models::Route;
use crate::utils::dom::{use_interval, use_timeout, viewport_width};

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Columns that fit the viewport, at least one.
fn rain_columns() -> usize {
    ((viewport_width() / RAIN_COLUMN_WIDTH).floor() as usize).max(1)
}

#[component]
pub fn Landing() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let rain = RwSignal::new(MatrixRain::new(
        rain_columns(),
        RAIN_MAX_TRAIL,
        &mut rand::thread_rng(),
    ));
    let pills_visible = RwSignal::new(false);

    use_interval(RAIN_TICK_MS, move || {
        rain.try_update(|r| r.tick(&mut rand::thread_rng()));
    });
    use_timeout(PILL_REVEAL_MS, move || {
        pills_visible.try_set(true);
    });

    let rain_view = move || {
        rain.with(|r| {
            r.columns()
                .map(|column| view! { <span class=css::column>{column}</span> })
                .collect_view()
        })
    };

    let pill_class = move |color: &'static str| {
        if pills_visible.get() {
            format!("{} {} {}", css::pill, color, css::pillVisible)
        } else {
            format!("{} {}", css::pill, color)
        }
    };

    view! {
        <div class=css::landing>
            <div class=css::rain aria-hidden="true">{rain_view}</div>

            <div class=css::content>
                <pre class=format!("{} glow", css::portrait)>{ASCII_PORTRAIT}</pre>
                <div class=css::quote>
                    {LANDING_QUOTE
                        .lines()
                        .map(|line| view! { <p>{line.to_string()}</p> })
                        .collect_view()}
                </div>

                <div class=css::pills>
                    <button
                        class=move || pill_class(css::red)
                        disabled=move || !pills_visible.get()
                        on:click=move |_| ctx.navigate(Route::Terminal)
                    >
                        "RED PILL"
                    </button>
                    <button
                        class=move || pill_class(css::blue)
                        disabled=move || !pills_visible.get()
                        on:click=move |_| ctx.navigate(Route::Profile)
                    >
                        "BLUE PILL"
                    </button>
                </div>
            </div>
        </div>
    }
}
