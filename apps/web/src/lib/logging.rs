//! Installs a `tracing` subscriber that writes formatted events to the browser
//! console. Errors and warnings go to `console.error`/`console.warn` so they
//! stand out in devtools.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy)]
enum Channel {
    Error,
    Warn,
    Log,
}

/// Buffers one formatted event and flushes it to the console on drop.
pub struct ConsoleWriter {
    channel: Channel,
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = JsValue::from_str(line.trim_end());
        match self.channel {
            Channel::Error => web_sys::console::error_1(&line),
            Channel::Warn => web_sys::console::warn_1(&line),
            Channel::Log => web_sys::console::log_1(&line),
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            channel: Channel::Log,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        let channel = match *meta.level() {
            Level::ERROR => Channel::Error,
            Level::WARN => Channel::Warn,
            _ => Channel::Log,
        };
        ConsoleWriter {
            channel,
            buffer: Vec::new(),
        }
    }
}

/// Installs the console subscriber. Unknown levels fall back to `info`.
pub fn init(level: &str) {
    let level = level.trim().parse::<Level>().unwrap_or(Level::INFO);

    // No wall clock formatting: `SystemTime` is unavailable on wasm32.
    let result = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .try_init();

    if result.is_err() {
        web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}
