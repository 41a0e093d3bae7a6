//! Display sinks.
//!
//! Each panel owns exactly one sink and overwrites it wholesale per event,
//! mirroring a UI region whose content is replaced on every update. With
//! concurrent operations the last response to arrive wins.

use std::sync::{Arc, Mutex};

/// An output region a panel renders into.
///
/// Panels take a sink by value; inject a [`RecordingSink`] to test the
/// submission and polling logic headlessly.
pub trait DisplaySink {
    /// Replace the sink's content with `text`.
    fn display(&self, text: &str);
}

/// Sink that prints each update to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn display(&self, text: &str) {
        println!("{text}");
    }
}

/// Sink that records every update in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// the other to a panel.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates displayed so far, in order.
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// The most recent update, if any.
    pub fn last(&self) -> Option<String> {
        self.frames.lock().ok().and_then(|f| f.last().cloned())
    }
}

impl DisplaySink for RecordingSink {
    fn display(&self, text: &str) {
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_shares_buffer_across_clones() {
        let sink = RecordingSink::new();
        let handle = sink.clone();

        sink.display("Loading...");
        sink.display("done");

        assert_eq!(handle.frames(), vec!["Loading...", "done"]);
        assert_eq!(handle.last().as_deref(), Some("done"));
    }
}
