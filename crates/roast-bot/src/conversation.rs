//! Short-term conversation context
//!
//! Keeps the last few `"speaker: text"` lines per chat so the LLM prompt can
//! see what was just said. Lives for the process lifetime only.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

/// Entries kept per chat.
pub const CONTEXT_CAPACITY: usize = 3;

/// Characters of message text kept per entry.
pub const ENTRY_MAX_CHARS: usize = 120;

/// Per-chat ring buffers of recent messages.
///
/// Every operation is a single critical section with no `.await` inside.
pub struct ConversationStore {
    chats: Mutex<HashMap<i64, VecDeque<String>>>,
    capacity: usize,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::with_capacity(CONTEXT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chats: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Append `"{speaker}: {text}"`, evicting the oldest entry when full.
    #[cfg(test)]
    pub fn record(&self, chat_id: i64, speaker: &str, text: &str) {
        let entry = format_entry(speaker, text);
        let mut chats = self.chats.lock().unwrap_or_else(PoisonError::into_inner);
        self.push(&mut chats, chat_id, entry);
    }

    /// Append `"{speaker}: {text}"`, evicting the oldest entry when full,
    /// then read the last `limit` entries under the same lock. The result
    /// always ends with this entry.
    pub fn record_and_recent(
        &self,
        chat_id: i64,
        speaker: &str,
        text: &str,
        limit: usize,
    ) -> Vec<String> {
        let entry = format_entry(speaker, text);
        let mut chats = self.chats.lock().unwrap_or_else(PoisonError::into_inner);
        let history = self.push(&mut chats, chat_id, entry);
        tail(history, limit)
    }

    /// Up to `limit` most recent entries, oldest first.
    pub fn recent(&self, chat_id: i64, limit: usize) -> Vec<String> {
        let chats = self.chats.lock().unwrap_or_else(PoisonError::into_inner);
        chats
            .get(&chat_id)
            .map(|history| tail(history, limit))
            .unwrap_or_default()
    }

    fn push<'a>(
        &self,
        chats: &'a mut HashMap<i64, VecDeque<String>>,
        chat_id: i64,
        entry: String,
    ) -> &'a VecDeque<String> {
        let history = chats
            .entry(chat_id)
            .or_insert_with(|| VecDeque::with_capacity(self.capacity));
        if history.len() == self.capacity {
            history.pop_front();
        }
        history.push_back(entry);
        history
    }

    #[cfg(test)]
    pub fn len(&self, chat_id: i64) -> usize {
        let chats = self.chats.lock().unwrap_or_else(PoisonError::into_inner);
        chats.get(&chat_id).map_or(0, VecDeque::len)
    }

    /// Number of chats with at least one recorded message.
    pub fn active_chats(&self) -> usize {
        self.chats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn format_entry(speaker: &str, text: &str) -> String {
    let clipped: String = text.chars().take(ENTRY_MAX_CHARS).collect();
    format!("{speaker}: {clipped}")
}

fn tail(history: &VecDeque<String>, limit: usize) -> Vec<String> {
    let skip = history.len().saturating_sub(limit);
    history.iter().skip(skip).cloned().collect()
}

pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
