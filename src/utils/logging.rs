//! `tracing` setup.
//!
//! Events are formatted by `tracing-subscriber`'s fmt layer and forwarded to
//! the browser console, one console call per event, with the console method
//! chosen by level. Native builds write to stderr.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber. Safe to call more than once.
pub fn init(max_level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!(%max_level, "logging initialized");
    }
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        emit(self.level, text.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, text: &str) {
    let value = wasm_bindgen::JsValue::from_str(text);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, text: &str) {
    eprintln!("{text}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_buffers_until_drop() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"hello ").unwrap();
        writer.write_all(b"world\n").unwrap();
        assert_eq!(writer.buf, b"hello world\n");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Level::DEBUG);
        init(Level::INFO);
        tracing::info!("still logging");
    }
}
