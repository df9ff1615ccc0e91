//! Terminal input components: the command line and the login prompt.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::{CompletionState, caret_at_end, utf16_len};
use crate::core::AutocompleteResult;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field with autocomplete, history navigation, and ghost text hints.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
    on_autocomplete: Callback<String, AutocompleteResult>,
    on_get_hint: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());
    let completion = CompletionState::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = utf16_len(&input.value());
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_tab = move |value: String| -> Option<String> {
        if value.is_empty() {
            return None;
        }
        if completion.is_cycling() {
            completion.next()
        } else {
            completion.begin(&value, on_autocomplete.run(value.clone()))
        }
    };

    // ArrowRight at the end of the line accepts the hint
    let handle_arrow_right = move |value: &str| -> Option<String> {
        let input = input_ref.get()?;
        let caret = input.selection_start().ok().flatten().unwrap_or(0);
        if !caret_at_end(caret, value) {
            return None;
        }
        let hint = completion.hint.get()?;
        completion.hint.set(None);
        Some(format!("{value}{hint}"))
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            if let Some(completed) = handle_tab(input_value.get()) {
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        "Enter" => {
            completion.reset();
            on_submit.run(input_value.get());
            set_input_value.set(String::new());
        }
        "ArrowUp" => {
            ev.prevent_default();
            completion.reset();
            if let Some(cmd) = on_history_nav.run(-1) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            completion.reset();
            set_input_value.set(on_history_nav.run(1).unwrap_or_default());
        }
        "ArrowRight" => {
            if let Some(completed) = handle_arrow_right(&input_value.get()) {
                ev.prevent_default();
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        "c" if ev.ctrl_key() => {
            completion.reset();
            set_input_value.set(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            completion.reset();
            on_submit.run("clear".to_string());
        }
        "Escape" => completion.reset(),
        _ => completion.stop_cycle(),
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let value = target.unchecked_into::<web_sys::HtmlInputElement>().value();
        set_input_value.set(value.clone());
        completion.stop_cycle();
        completion.hint.set(if value.is_empty() {
            None
        } else {
            on_get_hint.run(value)
        });
    };

    let suggestions_view = move || {
        let matches = completion.matches.get();
        if matches.is_empty() {
            return None;
        }
        let selected = completion.index.get();
        Some(view! {
            <div class=css::suggestions>
                {matches
                    .into_iter()
                    .enumerate()
                    .map(|(i, s)| {
                        let class_name = if selected == Some(i) {
                            format!("{} {}", css::suggestion, css::suggestionActive)
                        } else {
                            css::suggestion.to_string()
                        };
                        view! { <span class=class_name>{s}</span> }
                    })
                    .collect_view()}
            </div>
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <div class=css::field>
                    // Ghost text overlay (shows input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || input_value.get()}</span>
                        <span class=css::ghostHint>
                            {move || completion.hint.get().unwrap_or_default()}
                        </span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=input_value
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>

            {suggestions_view}
        </div>
    }
}

/// Username prompt shown once after boot.
#[component]
pub fn LoginPrompt(on_submit: Callback<String>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter"
            && let Some(input) = input_ref.get()
        {
            on_submit.run(input.value());
        }
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::loginLabel>"login: "</span>
                <div class=css::field>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        placeholder="guest"
                        on:keydown=handle_keydown
                    />
                </div>
            </div>
        </div>
    }
}
