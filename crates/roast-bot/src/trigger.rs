//! Decides how the bot reacts to an inbound message

use roast_types::IncomingMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Not a group chat, or no text.
    Ignore,
    /// Mentions the bot or replies to it: answer with the LLM.
    DirectAddress,
    /// Ordinary group chatter: roast candidate.
    Ambient,
}

pub fn classify(msg: &IncomingMessage, bot_handle: &str) -> Trigger {
    if !msg.chat.chat_type.is_group() {
        return Trigger::Ignore;
    }
    let Some(text) = msg.non_empty_text() else {
        return Trigger::Ignore;
    };

    if mentions(text, bot_handle) || replies_to(msg, bot_handle) {
        Trigger::DirectAddress
    } else {
        Trigger::Ambient
    }
}

/// `text` contains `@handle`, ignoring case.
pub fn mentions(text: &str, handle: &str) -> bool {
    !handle.is_empty()
        && text
            .to_lowercase()
            .contains(&format!("@{}", handle.to_lowercase()))
}

fn replies_to(msg: &IncomingMessage, handle: &str) -> bool {
    msg.reply_to
        .as_ref()
        .and_then(|reply| reply.from.as_ref())
        .is_some_and(|author| author.has_handle(handle))
}

pub fn is_command(text: &str) -> bool {
    text.starts_with('/')
}
