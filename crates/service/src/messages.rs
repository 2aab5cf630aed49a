//! Guestbook message board
//!
//! An append-only in-memory log of short messages. Readers only ever see
//! the most recent [`RECENT_LIMIT`] entries; older ones stay in memory but
//! off the wire.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// How many messages a read returns, newest last.
pub const RECENT_LIMIT: usize = 50;

/// One guestbook entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Record name the message was posted as.
    pub from: String,
    /// Message text, already trimmed.
    pub text: String,
    /// Server-side timestamp of the post.
    pub at: DateTime<Utc>,
}

/// Append-only message log with a bounded read window.
#[derive(Debug, Default)]
pub struct MessageBoard {
    messages: RwLock<Vec<Message>>,
}

impl MessageBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        MessageBoard {
            messages: RwLock::new(Vec::new()),
        }
    }

    /// Post a message. Blank text (after trimming) is dropped.
    ///
    /// Returns whether the message was stored.
    pub fn post(&self, from: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.write().push(Message {
            from: from.to_string(),
            text: text.to_string(),
            at: Utc::now(),
        });
        true
    }

    /// The most recent messages, oldest first, capped at [`RECENT_LIMIT`].
    pub fn recent(&self) -> Vec<Message> {
        let messages = self.messages.read();
        let start = messages.len().saturating_sub(RECENT_LIMIT);
        messages[start..].to_vec()
    }

    /// Total number of messages ever posted.
    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    /// Whether no message was ever posted.
    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}
