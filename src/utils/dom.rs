//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use std::time::Duration;

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Viewport width in CSS pixels, `0.0` when unavailable.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash, including the '#' prefix.
pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window()
        && window.location().set_hash(hash).is_err()
    {
        tracing::warn!(hash, "failed to set location hash");
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Run `tick` every `period_ms` until the calling component is unmounted.
pub fn use_interval(period_ms: u64, tick: impl Fn() + 'static) {
    match leptos::prelude::set_interval_with_handle(tick, Duration::from_millis(period_ms)) {
        Ok(handle) => leptos::prelude::on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!(error = ?e, period_ms, "failed to start interval"),
    }
}

/// Run `f` once after `delay_ms`, unless the calling component is unmounted first.
pub fn use_timeout(delay_ms: u64, f: impl FnOnce() + 'static) {
    match leptos::prelude::set_timeout_with_handle(f, Duration::from_millis(delay_ms)) {
        Ok(handle) => leptos::prelude::on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!(error = ?e, delay_ms, "failed to start timeout"),
    }
}
