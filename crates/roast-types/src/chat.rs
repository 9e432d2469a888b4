//! Chat, user, and inbound message types

use serde::{Deserialize, Serialize};

/// Display name used when the sender has no first name.
pub const DEFAULT_DISPLAY_NAME: &str = "love";

/// Telegram chat type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatType {
    /// Only group and supergroup conversations are processed.
    pub fn is_group(self) -> bool {
        matches!(self, ChatType::Group | ChatType::Supergroup)
    }
}

/// Telegram chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    pub title: Option<String>,
}

/// Telegram user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

impl User {
    /// True when this user's handle matches `handle`, ignoring ASCII case.
    pub fn has_handle(&self, handle: &str) -> bool {
        !handle.is_empty()
            && self
                .username
                .as_deref()
                .is_some_and(|u| u.eq_ignore_ascii_case(handle))
    }
}

/// The message an inbound message replies to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTo {
    pub message_id: i32,
    pub from: Option<User>,
}

/// Inbound text message as seen by the bot core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub message_id: i32,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
    pub reply_to: Option<ReplyTo>,
}

impl IncomingMessage {
    /// Sender first name, falling back to [`DEFAULT_DISPLAY_NAME`].
    pub fn display_name(&self) -> &str {
        self.from
            .as_ref()
            .map(|u| u.first_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Text, or `None` when absent or whitespace-only.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}
