//! Profile screen.
//!
//! Sidebar with the glitching name, rotating status, clock, biometrics and
//! arcade launchers; tabbed content; the music player panel.

mod data;
mod tabs;

use std::time::Duration;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::games::{Game, GameOverlay};
use crate::components::icons as ic;
use crate::components::player::PlayerPanel;
use crate::config::OWNER_NAME;
use crate::config::effects::{
    CLOCK_TICK_MS, GLITCH_HOLD_MS, GLITCH_PERIOD_MS, GLITCH_PROBABILITY, STATUS_PERIOD_MS,
};
use crate::core::effects::{StatusCycle, glitch};
use crate::models::Route;
use crate::utils::dom::use_interval;
use crate::utils::time::{local_clock, now_ms};

use data::{BIOMETRICS, ProfileTab, meter};
use tabs::TabPanel;

stylance::import_crate_style!(css, "src/components/profile/profile.module.css");

#[component]
pub fn Profile() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let clock = RwSignal::new(local_clock(now_ms()));
    let name = RwSignal::new(OWNER_NAME.to_string());
    let status = RwSignal::new(StatusCycle::default());
    let active_tab = RwSignal::new(ProfileTab::Overview);
    let active_game = RwSignal::new(None::<Game>);

    use_interval(CLOCK_TICK_MS, move || {
        clock.try_set(local_clock(now_ms()));
    });
    use_interval(GLITCH_PERIOD_MS, move || {
        name.try_set(glitch(OWNER_NAME, GLITCH_PROBABILITY, &mut rand::thread_rng()));
        set_timeout(
            move || {
                name.try_set(OWNER_NAME.to_string());
            },
            Duration::from_millis(GLITCH_HOLD_MS),
        );
    });
    use_interval(STATUS_PERIOD_MS, move || {
        status.try_update(|s| *s = s.advance());
    });

    let tab_button = move |tab: ProfileTab| {
        let class = move || {
            if active_tab.get() == tab {
                format!("{} {}", css::tab, css::tabActive)
            } else {
                css::tab.to_string()
            }
        };
        view! {
            <button class=class on:click=move |_| active_tab.set(tab)>
                {tab.label()}
            </button>
        }
    };

    let launcher = move |game: Game| {
        view! {
            <button class=css::launcher on:click=move |_| active_game.set(Some(game))>
                "▶ " {game.title()}
            </button>
        }
    };

    view! {
        <div class=css::profile>
            <div class=css::scanlines></div>

            {move || active_game.get().map(|game| view! {
                <GameOverlay game=game on_close=Callback::new(move |_| active_game.set(None)) />
            })}

            <div class=css::layout>
                <aside class=css::sidebar>
                    <div class=css::panel>
                        <h1 class=css::name>{move || name.get()}</h1>
                        <div class=css::status>
                            "STATUS: "
                            <span class=css::statusValue>{move || status.get().current()}</span>
                        </div>
                        <div class=css::meta>
                            <div>"ID: 0x7F4A9B2C"</div>
                            <div>"CLEARANCE: LEVEL_9"</div>
                            <div>"LOCAL_TIME: " {move || clock.get()}</div>
                        </div>
                    </div>

                    <div class=css::panel>
                        <h3 class=css::panelTitle>"BIOMETRICS"</h3>
                        {BIOMETRICS
                            .iter()
                            .map(|(label, level)| view! {
                                <div class=css::row>
                                    <span>{*label} ":"</span>
                                    <span class=css::accent>{meter(*level)}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class=css::panel>
                        <h3 class=css::panelTitle>
                            <Icon icon=ic::ARCADE />
                            " ARCADE.EXE"
                        </h3>
                        {Game::ALL.into_iter().map(launcher).collect_view()}
                    </div>

                    <PlayerPanel />

                    <div class=css::nav>
                        <button class=css::navButton on:click=move |_| ctx.navigate(Route::Landing)>
                            <Icon icon=ic::HOME />
                        </button>
                        <button class=css::navButton on:click=move |_| ctx.navigate(Route::Terminal)>
                            <Icon icon=ic::TERMINAL />
                        </button>
                    </div>
                </aside>

                <main class=css::main>
                    <nav class=css::tabs>
                        {ProfileTab::ALL.into_iter().map(tab_button).collect_view()}
                    </nav>
                    <div class=css::content>
                        {move || {
                            let tab = active_tab.get();
                            view! { <TabPanel tab=tab clock=clock /> }
                        }}
                    </div>
                </main>
            </div>
        </div>
    }
}
