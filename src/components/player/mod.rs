//! Music player panel on the profile screen.
//!
//! Dispatches the same [`PlayerAction`]s as the terminal's music verbs.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::PlayerAction;
use crate::utils::format_playback;

stylance::import_crate_style!(css, "src/components/player/player.module.css");

#[component]
pub fn PlayerPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let player = ctx.player;

    let title = move || {
        player.with(|p| {
            p.current_song()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "No tracks loaded".to_string())
        })
    };
    let cover = move || {
        player.with(|p| {
            p.current_song()
                .filter(|s| s.has_cover())
                .map(|s| s.image_src.clone())
        })
    };
    let elapsed = move || {
        player.with(|p| {
            format!(
                "{} / {}",
                format_playback(p.position()),
                format_playback(p.duration())
            )
        })
    };

    let on_seek = move |e: ev::Event| {
        let Some(target) = e.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        if let Ok(at) = input.value().parse::<f64>() {
            ctx.dispatch(PlayerAction::Seek(at));
        }
    };

    let playlist = move || {
        player.with(|p| {
            let current = p.current_index();
            p.songs()
                .iter()
                .enumerate()
                .map(|(i, song)| {
                    let class = if i == current {
                        format!("{} {}", css::track, css::trackActive)
                    } else {
                        css::track.to_string()
                    };
                    let name = song.name.clone();
                    view! {
                        <li class=class on:click=move |_| ctx.dispatch(PlayerAction::Select(i))>
                            {format!("{:>2}. {}", i + 1, name)}
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class=css::panel>
            <h3 class=css::title>
                <Icon icon=ic::MUSIC />
                " NEURAL_AUDIO"
            </h3>

            <div class=css::nowPlaying>
                {move || cover().map(|src| view! { <img class=css::cover src=src alt="" /> })}
                <div class=css::meta>
                    <div class=css::song>{title}</div>
                    <div class=css::time>{elapsed}</div>
                </div>
            </div>

            <input
                class=css::seek
                type="range"
                min="0"
                step="1"
                prop:max=move || player.with(|p| p.duration())
                prop:value=move || player.with(|p| p.position())
                on:change=on_seek
            />

            <div class=css::buttons>
                <button class=css::button on:click=move |_| ctx.dispatch(PlayerAction::Prev)>
                    <Icon icon=ic::PREV />
                </button>
                <button class=css::button on:click=move |_| ctx.dispatch(PlayerAction::Toggle)>
                    {move || if player.with(|p| p.is_playing()) {
                        view! { <Icon icon=ic::PAUSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::PLAY /> }.into_any()
                    }}
                </button>
                <button class=css::button on:click=move |_| ctx.dispatch(PlayerAction::Next)>
                    <Icon icon=ic::NEXT />
                </button>
            </div>

            <ul class=css::playlist>{playlist}</ul>
        </div>
    }
}
