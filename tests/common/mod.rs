//! Shared test helpers: captures tracing events emitted by the crate.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer};

type Lines = Arc<Mutex<Vec<String>>>;

/// Layer that records the formatted message of every event
struct CaptureLayer {
    lines: Lines,
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.lines
                .lock()
                .map(|mut lines| lines.push(message))
                .ok();
        }
    }
}

/// Writer that appends each completed line to the shared transcript
pub struct TranscriptWriter {
    lines: Lines,
    pending: Vec<u8>,
}

impl Write for TranscriptWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            let text = String::from_utf8_lossy(&line[..line.len() - 1]).into_owned();
            self.lines
                .lock()
                .map(|mut lines| lines.push(text))
                .ok();
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<T>(filter: Option<EnvFilter>, lines: Lines, f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(CaptureLayer { lines });
    tracing::subscriber::with_default(subscriber, f)
}

fn snapshot(lines: &Lines) -> Vec<String> {
    lines.lock().map(|l| l.clone()).unwrap_or_default()
}

/// Run `f` with a capturing subscriber and return its result plus the log lines
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    capture_logs_filtered(None, f)
}

/// Like `capture_logs`, but events must also pass `filter`
pub fn capture_logs_filtered<T>(
    filter: Option<EnvFilter>,
    f: impl FnOnce() -> T,
) -> (T, Vec<String>) {
    let lines = Lines::default();
    let result = capture(filter, lines.clone(), f);
    (result, snapshot(&lines))
}

/// Run `f` with a writer whose lines interleave with log lines in one transcript
pub fn capture_transcript<T>(f: impl FnOnce(&mut TranscriptWriter) -> T) -> (T, Vec<String>) {
    let lines = Lines::default();
    let mut writer = TranscriptWriter {
        lines: lines.clone(),
        pending: Vec::new(),
    };
    let result = capture(None, lines.clone(), || f(&mut writer));
    (result, snapshot(&lines))
}

/// Lines that report an added user
pub fn added_lines(lines: &[String]) -> Vec<&String> {
    lines.iter().filter(|l| l.starts_with("Added user")).collect()
}

/// Lines that report a save
pub fn saved_lines(lines: &[String]) -> Vec<&String> {
    lines.iter().filter(|l| l.contains("saved")).collect()
}
