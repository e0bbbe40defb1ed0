//! Transcript store
//!
//! Ordered, append-only log of chat entries. Entries are never edited or
//! removed individually; [`TranscriptStore::reset`] is the only way to clear
//! the log and always leaves a single greeting behind.

use sentinex_core::domain::step::ProgressSnapshot;
use sentinex_core::domain::transcript::TranscriptEntry;
use std::sync::Arc;

/// Receives transcript and progress updates as they happen
///
/// Front ends implement this to render new entries immediately (the terminal
/// equivalent of scrolling the chat to the bottom).
pub trait TranscriptSink: Send + Sync {
    /// Called after an entry has been appended
    fn on_entry(&self, entry: &TranscriptEntry);

    /// Called after every step tracker transition
    fn on_progress(&self, _progress: &ProgressSnapshot) {}

    /// Called after the transcript has been reset
    fn on_reset(&self) {}
}

/// Sink that ignores every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TranscriptSink for NullSink {
    fn on_entry(&self, _entry: &TranscriptEntry) {}
}

/// Append-only transcript with a fixed reset greeting
pub struct TranscriptStore {
    entries: Vec<TranscriptEntry>,
    greeting: String,
    sink: Arc<dyn TranscriptSink>,
}

impl TranscriptStore {
    /// Creates an empty store
    ///
    /// # Arguments
    /// * `greeting` - System text appended by every reset
    pub fn new(greeting: impl Into<String>) -> Self {
        Self::with_sink(greeting, Arc::new(NullSink))
    }

    pub fn with_sink(greeting: impl Into<String>, sink: Arc<dyn TranscriptSink>) -> Self {
        Self {
            entries: Vec::new(),
            greeting: greeting.into(),
            sink,
        }
    }

    /// Adds an entry to the end and notifies the sink
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.sink.on_entry(&entry);
        self.entries.push(entry);
    }

    /// Clears the log and appends a fresh greeting
    pub fn reset(&mut self) {
        self.entries.clear();
        self.sink.on_reset();
        self.append(TranscriptEntry::system(self.greeting.clone()));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}
