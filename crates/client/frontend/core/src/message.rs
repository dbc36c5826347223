//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Circular buffer of messages displayed to the user.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Info));
    }

    pub fn push_success(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Success));
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Warning));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Error));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
