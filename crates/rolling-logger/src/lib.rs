//! Rolling Logger
//!
//! `tracing` layer that keeps the most recent log lines in a circular
//! buffer and mirrors each line to the browser console (stderr when not
//! running in wasm). `log` records are bridged in by `tracing-subscriber`.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Lines kept before the oldest is dropped
pub const DEFAULT_CAPACITY: usize = 500;

static GLOBAL_BUFFER: OnceLock<LogBuffer> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

/// Fixed-capacity line buffer, oldest evicted first
#[derive(Debug)]
struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }
}

/// Shared handle to a ring buffer of formatted lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<RingBuffer>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RingBuffer::new(capacity))),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut buffer) = self.inner.lock() {
            buffer.push(line);
        }
    }

    /// Snapshot, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|buffer| buffer.lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|buffer| buffer.lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects the message and any extra fields of an event
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
    /// Target of a record bridged from `log`
    log_target: Option<String>,
}

impl LineVisitor {
    fn skip(field: &Field) -> bool {
        // Metadata added by the log bridge
        field.name().starts_with("log.")
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else if field.name() == "log.target" {
            self.log_target = Some(value.to_string());
        } else if !Self::skip(field) {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else if !Self::skip(field) {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// `[HH:MM:SS.mmm] LEVEL target: message key=value...`
fn format_line(time: &str, level: &Level, target: &str, message: &str, fields: &str) -> String {
    format!("[{}] {:>5} {}: {}{}", time, level.as_str(), target, message, fields)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    let value = line.into();
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{}", line);
}

/// Layer writing every event into a `LogBuffer`
pub struct RingBufferLayer {
    buffer: LogBuffer,
    mirror: bool,
}

impl RingBufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, mirror: true }
    }

    /// Keep lines in the buffer only, no console output
    pub fn quiet(buffer: LogBuffer) -> Self {
        Self { buffer, mirror: false }
    }
}

impl<S: Subscriber> Layer<S> for RingBufferLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let target = visitor.log_target.as_deref().unwrap_or(meta.target());
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&time, meta.level(), target, &visitor.message, &visitor.fields);

        if self.mirror {
            emit(meta.level(), &line);
        }
        self.buffer.push(line);
    }
}

fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global logger. Read it back with `recent_lines`.
pub fn init_logger(app_name: &str) -> Result<(), LoggerError> {
    let buffer = LogBuffer::new(DEFAULT_CAPACITY);
    tracing_subscriber::registry()
        .with(RingBufferLayer::new(buffer.clone()).with_filter(LevelFilter::from_level(default_level())))
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    let _ = GLOBAL_BUFFER.set(buffer);
    tracing::info!(app = app_name, capacity = DEFAULT_CAPACITY, "logger initialized");
    Ok(())
}

/// Recent lines from the global logger, empty if not initialized
pub fn recent_lines() -> Vec<String> {
    GLOBAL_BUFFER.get().map(LogBuffer::lines).unwrap_or_default()
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

pub fn error(msg: &str) {
    tracing::error!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(capacity: usize, f: impl FnOnce()) -> LogBuffer {
        let buffer = LogBuffer::new(capacity);
        let subscriber = tracing_subscriber::registry().with(RingBufferLayer::quiet(buffer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        buffer
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut ring = RingBuffer::new(3);
        for i in 0..5 {
            ring.push(format!("line {}", i));
        }
        let lines: Vec<_> = ring.lines.iter().cloned().collect();
        assert_eq!(lines, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut ring = RingBuffer::new(0);
        ring.push("a".to_string());
        ring.push("b".to_string());
        assert_eq!(ring.lines.len(), 1);
        assert_eq!(ring.lines[0], "b");
    }

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:00.000", &Level::INFO, "stirfry", "card added", " list=pool");
        assert_eq!(line, "[12:00:00.000]  INFO stirfry: card added list=pool");
    }

    #[test]
    fn test_layer_records_message_and_fields() {
        let buffer = capture(10, || {
            tracing::warn!(target: "dnd", from = "timeline", "transfer rejected");
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" WARN dnd: transfer rejected from=timeline"), "{}", lines[0]);
    }

    #[test]
    fn test_bridged_record_keeps_its_target() {
        let buffer = capture(10, || {
            tracing::info!(log.target = "ui", log.line = 7u64, "from log");
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" INFO ui: from log"), "{}", lines[0]);
    }

    #[test]
    fn test_layer_respects_capacity() {
        let buffer = capture(2, || {
            tracing::info!("one");
            tracing::info!("two");
            tracing::info!("three");
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }
}
