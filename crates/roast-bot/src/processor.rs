//! Per-message decision pipeline
//!
//! Transport-free: takes an [`IncomingMessage`] and returns the reply to send,
//! if any. The Telegram handler owns delivery.

#[cfg(test)]
#[path = "processor_tests.rs"]
mod processor_tests;

use llm_huggingface::HuggingFaceClient;
use roast_std::time::{Clock, SystemClock};
use roast_types::IncomingMessage;
use tracing::{debug, instrument};

use crate::conversation::{normalize_text, ConversationStore};
use crate::cooldown::CooldownTracker;
use crate::corpus::Corpus;
use crate::dice::{roast_probability, Dice};
use crate::prompt::{build_prompt, PROMPT_CONTEXT_LINES};
use crate::reply::finalize_reply;
use crate::trigger::{classify, is_command, Trigger};

/// Reply produced for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Answer to a direct address.
    Llm(String),
    /// Unprompted roast from the corpus.
    Roast(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Llm(text) | Reply::Roast(text) => text,
        }
    }
}

pub struct MessageProcessor<C: Clock = SystemClock> {
    bot_handle: String,
    conversations: ConversationStore,
    cooldowns: CooldownTracker<C>,
    corpus: Corpus,
    dice: Box<dyn Dice>,
    llm: HuggingFaceClient<C>,
}

impl<C: Clock> MessageProcessor<C> {
    pub fn new(
        bot_handle: impl Into<String>,
        corpus: Corpus,
        llm: HuggingFaceClient<C>,
        cooldowns: CooldownTracker<C>,
        dice: Box<dyn Dice>,
    ) -> Self {
        Self {
            bot_handle: bot_handle.into(),
            conversations: ConversationStore::new(),
            cooldowns,
            corpus,
            dice,
            llm,
        }
    }

    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    /// Classify, record context, and decide on a reply.
    ///
    /// Text is whitespace-normalized once and used for the command check,
    /// the context entry and the prompt. The message is recorded and the
    /// context read under one lock before the decision, so a direct address
    /// sees itself as the newest context line. Commands are never recorded.
    #[instrument(skip_all, fields(chat_id = msg.chat.id, message_id = msg.message_id))]
    pub async fn process(&self, msg: &IncomingMessage) -> Option<Reply> {
        let trigger = classify(msg, &self.bot_handle);
        if trigger == Trigger::Ignore {
            return None;
        }
        let text = normalize_text(msg.non_empty_text()?);
        let chat_id = msg.chat.id;
        let name = msg.display_name();

        let context = if is_command(&text) {
            self.conversations.recent(chat_id, PROMPT_CONTEXT_LINES)
        } else {
            self.conversations
                .record_and_recent(chat_id, name, &text, PROMPT_CONTEXT_LINES)
        };

        match trigger {
            Trigger::DirectAddress => {
                let prompt = build_prompt(&text, &context, &self.bot_handle);
                debug!(context_lines = context.len(), "Direct address, asking the model");

                let raw = self.llm.generate(&prompt).await;
                Some(Reply::Llm(finalize_reply(&raw)))
            }
            Trigger::Ambient => {
                if !roast_probability(self.dice.as_ref()) {
                    return None;
                }
                if !self.cooldowns.roast_allowed(chat_id) {
                    debug!("Roast skipped, chat cooling down");
                    return None;
                }
                let line = self.corpus.pick(self.dice.as_ref());
                debug!("Roasting");
                Some(Reply::Roast(format!("{name} {line}")))
            }
            Trigger::Ignore => None,
        }
    }
}
