//! Terminal screen component.
//!
//! Owns one [`SessionState`] per mount: boot log, login prompt, transcript
//! and command input. Effects returned by the session reducer are carried
//! out here.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::boot;
use super::input::{Input, LoginPrompt};
use super::output::Entry;
use crate::app::AppContext;
use crate::config::exit::{CUE_MAX_MS, CUE_SRC, FALLBACK_MS};
use crate::core::{
    AutocompleteResult, Effect as SessionEffect, Phase, SessionState, autocomplete, get_hint, probe,
};
use crate::models::Route;
use crate::utils::{BrowserNetwork, RaceResult, now_ms, race_with_timeout};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Helper Functions
// ============================================================================

/// Focus the terminal input element.
fn focus_input() {
    use wasm_bindgen::JsCast;
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(input) = document.query_selector("input").ok().flatten()
        && let Ok(element) = input.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = element.focus();
    }
}

/// Auto-scroll output to bottom when the transcript or boot log changes.
fn setup_autoscroll_effect(
    session: RwSignal<SessionState>,
    boot_log: RwSignal<Vec<String>>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        session.track();
        boot_log.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let session = RwSignal::new(SessionState::new(now_ms()));
    let boot_log = RwSignal::new(Vec::<String>::new());
    let output_ref = NodeRef::<leptos::html::Div>::new();

    boot::run(session, boot_log);
    setup_autoscroll_effect(session, boot_log, output_ref);

    // Only phase changes swap the input widgets
    let phase = Memo::new(move |_| session.with(|s| s.phase));
    let prompt = Signal::derive(move || session.with(|s| s.prompt()));

    let on_submit = create_submit_callback(ctx, session);
    let on_history_nav = Callback::new(move |direction: i32| {
        session.try_update(|s| s.navigate_history(direction)).flatten()
    });
    let on_autocomplete = Callback::new(move |input: String| -> AutocompleteResult {
        session.with_untracked(|s| autocomplete(&input, &s.shell.cwd, &s.shell.fs))
    });
    let on_get_hint = Callback::new(move |input: String| {
        session.with_untracked(|s| get_hint(&input, &s.shell.cwd, &s.shell.fs))
    });

    let input_view = move || match phase.get() {
        Phase::AwaitingUsername => view! { <LoginPrompt on_submit=on_submit /> }.into_any(),
        Phase::Interactive => view! {
            <Input
                prompt=prompt
                on_submit=on_submit
                on_history_nav=on_history_nav
                on_autocomplete=on_autocomplete
                on_get_hint=on_get_hint
            />
        }
        .into_any(),
        Phase::Booting | Phase::Exited => ().into_any(),
    };

    view! {
        <div class=css::screen>
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <div class=css::container on:click=move |_| focus_input()>
                <div node_ref=output_ref class=css::output>
                    <Show when=move || matches!(phase.get(), Phase::Booting | Phase::AwaitingUsername)>
                        <pre class=css::bootLog>{move || boot_log.get().join("\n")}</pre>
                    </Show>
                    <For
                        each=move || session.with(|s| s.transcript.clone())
                        key=|entry| entry.render_key()
                        children=|entry| view! { <Entry entry=entry /> }
                    />
                </div>

                <div class=css::inputArea>{input_view}</div>
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext, session: RwSignal<SessionState>) -> Callback<String> {
    Callback::new(move |input: String| {
        let mut player = ctx.player.get_untracked();
        let effect = session
            .try_update(|s| s.submit(&input, &mut player, now_ms()))
            .flatten();

        if ctx.player.with_untracked(|p| *p != player) {
            ctx.player.set(player);
        }
        if let Some(effect) = effect {
            dispatch(effect, ctx, session);
        }
    })
}

// ============================================================================
// Effects
// ============================================================================

fn dispatch(effect: SessionEffect, ctx: AppContext, session: RwSignal<SessionState>) {
    match effect {
        SessionEffect::Curl { entry, url } => spawn_local(async move {
            let lines = probe::curl(&BrowserNetwork, &url).await;
            session.try_update(|s| s.resolve_async_entry(entry, lines));
        }),
        SessionEffect::Ping { entry, host } => spawn_local(async move {
            let report = probe::ping(&BrowserNetwork, &host, |lines| {
                session.try_update(|s| s.resolve_async_entry(entry, lines));
            })
            .await;
            session.try_update(|s| s.resolve_async_entry(entry, report.final_lines()));
        }),
        SessionEffect::Exit => spawn_local(async move {
            if !play_exit_cue().await {
                TimeoutFuture::new(FALLBACK_MS).await;
            }
            ctx.navigate(Route::Landing);
        }),
    }
}

/// Play the closing cue to its end. Returns `false` if it could not start.
async fn play_exit_cue() -> bool {
    let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(CUE_SRC) else {
        return false;
    };
    let ended = js_sys::Promise::new(&mut |resolve, _| {
        audio.set_onended(Some(&resolve));
    });

    let started = match audio.play() {
        Ok(promise) => JsFuture::from(promise).await.is_ok(),
        Err(_) => false,
    };
    if !started {
        tracing::debug!("exit cue blocked, using fallback delay");
        return false;
    }

    match race_with_timeout(ended, CUE_MAX_MS).await {
        RaceResult::Completed(_) => {}
        RaceResult::TimedOut => tracing::debug!("exit cue still playing, leaving anyway"),
        RaceResult::Error(e) => tracing::warn!(error = %e, "exit cue failed"),
    }
    true
}
