//! Boot sequence driver.
//!
//! Steps the [`BootSequencer`] on gloo timers and publishes the rendered
//! log, then moves the session on to the login prompt.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::boot::STAGES;
use crate::core::{BootSequencer, BootStep, SessionState};

/// Run the boot sequence once for a freshly mounted session.
///
/// Stops quietly if the terminal is unmounted mid-boot.
pub fn run(session: RwSignal<SessionState>, log: RwSignal<Vec<String>>) {
    spawn_local(async move {
        let mut sequencer = BootSequencer::new(STAGES);

        while !sequencer.is_done() {
            let BootStep::Wait(ms) = sequencer.step() else {
                break;
            };
            if log.try_set(sequencer.lines()).is_some() {
                tracing::debug!("terminal unmounted during boot");
                return;
            }
            TimeoutFuture::new(ms).await;
        }

        session.try_update(|s| s.finish_boot());
        tracing::info!(stages = STAGES.len(), "boot complete");
    });
}
