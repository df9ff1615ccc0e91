//! Tab panels of the profile screen.

use leptos::prelude::*;

use super::css;
use super::data::{
    CAPABILITIES, CONTACT, LIMITATIONS, LOCATION, OVERVIEW, PREDICTIONS, PROJECTS, ProfileTab,
    TIMELINE,
};

fn tech_tags(tech: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class=css::tags>
            {tech.iter().map(|t| view! { <span class=css::tag>{*t}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn TabPanel(tab: ProfileTab, #[prop(into)] clock: Signal<String>) -> impl IntoView {
    match tab {
        ProfileTab::Overview => view! {
            <section>
                <h2 class=css::heading>"NEURAL_INTERFACE_INIT"</h2>
                {OVERVIEW.iter().map(|p| view! { <p class=css::paragraph>{*p}</p> }).collect_view()}
                <h3 class=css::subheading>"GPS_COORDINATES"</h3>
                <div class=css::map>
                    <div class=css::marker>"⦿"</div>
                    <div>{LOCATION.0}</div>
                    <div class=css::dim>{LOCATION.1}</div>
                    <div class=css::dim>"LAST_PING: " {clock}</div>
                </div>
            </section>
        }
        .into_any(),

        ProfileTab::Capabilities => view! {
            <section>
                <h2 class=css::heading>"NEURAL_SKILLS"</h2>
                {CAPABILITIES
                    .iter()
                    .map(|cap| {
                        let bar = format!(
                            "width: {}%; background-color: {}; box-shadow: 0 0 12px {}",
                            cap.level, cap.color, cap.color
                        );
                        view! {
                            <div class=css::skill>
                                <div class=css::row>
                                    <span>{cap.skill}</span>
                                    <span style=format!("color: {}", cap.color)>{cap.level} "%"</span>
                                </div>
                                <div class=css::barTrack>
                                    <div class=css::barFill style=bar></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
                <h3 class=css::subheading>"SYSTEM_LIMITATIONS"</h3>
                <ul class=css::list>
                    {LIMITATIONS.iter().map(|l| view! { <li>{*l}</li> }).collect_view()}
                </ul>
            </section>
        }
        .into_any(),

        ProfileTab::Projects => view! {
            <section>
                <h2 class=css::heading>"ACTIVE_OPERATIONS"</h2>
                {PROJECTS
                    .iter()
                    .map(|project| view! {
                        <article class=css::card>
                            <div class=css::row>
                                <h3 class=css::cardTitle>{project.name}</h3>
                                <span class=css::badge>{project.status}</span>
                            </div>
                            <p class=css::paragraph>{project.description}</p>
                            <div class=css::row>
                                {tech_tags(project.tech)}
                                <span class=css::threat>"THREAT_LVL: " {project.impact}</span>
                            </div>
                        </article>
                    })
                    .collect_view()}
            </section>
        }
        .into_any(),

        ProfileTab::Timeline => view! {
            <section>
                <h2 class=css::heading>"WORK_HISTORY.LOG"</h2>
                {TIMELINE
                    .iter()
                    .map(|job| {
                        let dot = if job.current {
                            format!("{} {}", css::timelineDot, css::current)
                        } else {
                            css::timelineDot.to_string()
                        };
                        view! {
                            <article class=css::timelineItem>
                                <div class=dot>{job.start_year()}</div>
                                <div class=css::card>
                                    <div class=css::row>
                                        <div>
                                            <h3 class=css::cardTitle>{job.title}</h3>
                                            <div>{job.company}</div>
                                            <div class=css::dim>{job.location}</div>
                                        </div>
                                        <div class=css::dim>{job.years}</div>
                                    </div>
                                    <p class=css::paragraph>{job.description}</p>
                                    {tech_tags(job.tech)}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        }
        .into_any(),

        ProfileTab::Predictions => view! {
            <section>
                <h2 class=css::heading>"NEURAL_PREDICTIONS"</h2>
                {PREDICTIONS
                    .iter()
                    .map(|pred| view! {
                        <article class=css::card>
                            <div class=css::row>
                                <h3 class=css::cardTitle>{pred.topic}</h3>
                                <div class=css::dim>
                                    "CERTAINTY: " {pred.confidence} "% · " {pred.window}
                                </div>
                            </div>
                            <p class=css::paragraph>{pred.prediction}</p>
                            <div class=css::barTrack>
                                <div
                                    class=format!("{} {}", css::barFill, css::gradient)
                                    style=format!("width: {}%", pred.confidence)
                                ></div>
                            </div>
                        </article>
                    })
                    .collect_view()}
            </section>
        }
        .into_any(),

        ProfileTab::Contact => view! {
            <section>
                <h2 class=css::heading>"NEURAL_LINK_PROTOCOLS"</h2>
                <div class=css::card>
                    <h3 class=css::subheading>"PRIMARY_CHANNELS"</h3>
                    {CONTACT
                        .iter()
                        .map(|(label, value)| view! {
                            <div class=css::row>
                                <span>{*label} ":"</span>
                                <span class=css::accent>{*value}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any(),
    }
}
