//! Outcome of a completion call and the user-facing text for each outcome

pub const FROZE_REPLY: &str = "Sorry love—my brain froze for a second. Try again?";
pub const BROKE_REPLY: &str = "Oops love… something broke on my side. Try again in a moment?";
pub const BUSY_REPLY: &str = "I’m a bit busy right now, my dear—try again shortly.";

/// Result of one attempt, and of the whole retry loop.
///
/// Only `Success` and `Permanent` end the loop early; the others are
/// retried until the attempt budget runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Trimmed content of the first choice.
    Success(String),
    /// HTTP 429 or 503.
    RateLimited,
    Timeout,
    /// Transport failure or a 200 body that does not parse.
    Unexpected(String),
    /// Any other status. `body` is already capped.
    Permanent { status: u16, body: String },
}

impl Completion {
    /// Text to send to the chat.
    pub fn into_reply(self) -> String {
        match self {
            Completion::Success(text) => text,
            Completion::Permanent { status, body } => format!("(LLM error {status}) {body}…"),
            Completion::Timeout => FROZE_REPLY.to_string(),
            Completion::Unexpected(_) => BROKE_REPLY.to_string(),
            Completion::RateLimited => BUSY_REPLY.to_string(),
        }
    }
}
