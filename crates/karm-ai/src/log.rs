//! Append-only conversation log.
//!
//! Turns are committed in submission order and never reordered or
//! removed. `history()` derives the wire view sent with each request.

use crate::{HistoryMessage, Turn};

/// Ordered, append-only sequence of turns.
#[derive(Debug, Default)]
pub struct MessageLog {
    turns: Vec<Turn>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end. Returns the new length.
    pub fn append(&mut self, turn: Turn) -> usize {
        self.turns.push(turn);
        self.turns.len()
    }

    /// Lazy, order-preserving view of every committed turn with roles
    /// mapped to the remote API vocabulary. The utterance currently in
    /// flight is never part of the log when this view is taken; it
    /// travels separately on the request.
    pub fn history(&self) -> impl Iterator<Item = HistoryMessage> + '_ {
        self.turns.iter().map(|turn| HistoryMessage {
            role: turn.role.api_name(),
            text: turn.text.clone(),
        })
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
