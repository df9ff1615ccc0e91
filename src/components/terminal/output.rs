use leptos::prelude::*;

use crate::models::{EchoedInput, ListFormat, OutputLine, TextStyle, TranscriptEntry};
use crate::utils::format::{format_date_short, format_size};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a TextStyle
fn style_class(style: TextStyle) -> String {
    match style {
        TextStyle::Directory => format!("{} {}", css::textCyan, css::fontBold),
        TextStyle::File => css::textFg.to_string(),
    }
}

/// One transcript entry: the echoed command line followed by its output.
#[component]
pub fn Entry(entry: TranscriptEntry) -> impl IntoView {
    view! {
        <div class=css::entry>
            {entry.input.map(|input| view! { <Echo input=input /> })}
            {entry
                .output
                .into_iter()
                .map(|line| view! { <Output line=line /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn Echo(input: EchoedInput) -> impl IntoView {
    view! {
        <div class=css::command>
            <span class=format!("{} glow", css::textGreen)>{input.prompt}</span>
            <span class=css::textDim>"$ "</span>
            <span class=css::textFg>{input.line}</span>
        </div>
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line {
        OutputLine::Text(text) => {
            view! { <div class=format!("{} {}", css::line, css::textFg)>{text}</div> }.into_any()
        }
        OutputLine::ListEntry { name, style, format } => match format {
            ListFormat::Short => view! {
                <div class=css::listEntry>
                    <span class=style_class(style)>{name}</span>
                </div>
            }
            .into_any(),
            ListFormat::Long {
                permissions,
                size,
                modified,
            } => view! {
                <div class=css::listEntry>
                    <span class=css::textDim>{permissions}</span>
                    <span class=css::textDim>{format_size(size, true)}</span>
                    <span class=css::textDim>{format_date_short(modified)}</span>
                    <span class=style_class(style)>{name}</span>
                </div>
            }
            .into_any(),
        },
        OutputLine::Error(text) => {
            view! { <div class=format!("{} {}", css::line, css::textRed)>{text}</div> }.into_any()
        }
        OutputLine::Success(text) => {
            view! { <div class=format!("{} {}", css::line, css::textGreen)>{text}</div> }
                .into_any()
        }
        OutputLine::Info(text) => {
            view! { <div class=format!("{} {}", css::line, css::textYellow)>{text}</div> }
                .into_any()
        }
        OutputLine::Ascii(text) => {
            view! { <pre class=format!("{} glow", css::ascii)>{text}</pre> }.into_any()
        }
        OutputLine::Empty => view! { <div class=css::lineEmpty></div> }.into_any(),
    }
}
