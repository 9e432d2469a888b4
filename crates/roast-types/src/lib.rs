//! Transport-agnostic chat types for the roast bot
//!
//! The Telegram handlers convert platform updates into these types so the
//! trigger, context and reply logic never depend on teloxide directly.

pub mod chat;

pub use chat::{Chat, ChatType, IncomingMessage, ReplyTo, User};
