//! Player-facing feedback produced by the game.

use crate::EngineConfig;
use std::collections::VecDeque;

/// An ordered queue of human-readable messages.
///
/// The presentation layer drains it between turns. When a capacity is set the
/// oldest undrained messages are discarded first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    messages: VecDeque<String>,
    capacity: Option<usize>,
}

impl Default for MessageLog {
    /// A log with the same capacity as the default [`EngineConfig`].
    fn default() -> Self {
        Self::with_capacity(EngineConfig::default().message_capacity)
    }
}

impl MessageLog {
    /// Creates a log holding at most `capacity` messages; `0` means unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        MessageLog {
            messages: VecDeque::new(),
            capacity: (capacity > 0).then_some(capacity),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
        if let Some(capacity) = self.capacity {
            while self.messages.len() > capacity {
                self.messages.pop_front();
            }
        }
    }

    /// Removes and returns every message, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        self.messages.drain(..).collect()
    }

    /// Returns up to `n` of the most recent messages, oldest first, without
    /// removing them.
    pub fn recent(&self, n: usize) -> Vec<&str> {
        let skip = self.messages.len().saturating_sub(n);
        self.messages.iter().skip(skip).map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Upper-cases the first letter of `text` and makes sure it ends with a full stop.
pub(crate) fn sentence(text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    let mut chars = text.chars();
    let mut out: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if !out.ends_with(|c: char| c == '.' || c == '!') {
        out.push('.');
    }
    out
}
