//! Telegram update handlers

use std::sync::Arc;

use roast_types::{Chat, ChatType, IncomingMessage, ReplyTo, User};
use teloxide::prelude::*;
use teloxide::types::{Message, ReplyParameters};
use tracing::{debug, error, info};

use crate::health::AppState;
use crate::processor::{MessageProcessor, Reply};

/// Handle text messages
pub async fn handle_text_message(
    bot: Bot,
    msg: Message,
    processor: Arc<MessageProcessor>,
    health: AppState,
) -> ResponseResult<()> {
    health.increment_messages_received().await;

    let incoming = convert_message(&msg);
    let reply = processor.process(&incoming).await;
    health
        .set_active_chats(processor.conversations().active_chats())
        .await;

    let Some(reply) = reply else {
        return Ok(());
    };

    let mut req = bot.send_message(msg.chat.id, reply.text());
    req.reply_parameters = Some(ReplyParameters::new(msg.id));

    match req.await {
        Ok(_) => {
            match reply {
                Reply::Llm(_) => {
                    debug!(chat_id = msg.chat.id.0, "Sent LLM reply");
                    health.increment_llm_replies().await;
                }
                Reply::Roast(_) => {
                    info!(chat_id = msg.chat.id.0, "Sent roast");
                    health.increment_roasts_sent().await;
                }
            }
        }
        Err(e) => {
            error!(chat_id = msg.chat.id.0, "Failed to send reply: {}", e);
            health.increment_errors().await;
        }
    }

    Ok(())
}

fn convert_message(msg: &Message) -> IncomingMessage {
    IncomingMessage {
        message_id: msg.id.0,
        chat: convert_chat(&msg.chat),
        from: msg.from.as_ref().map(convert_user),
        text: msg.text().map(str::to_string),
        reply_to: msg.reply_to_message().map(|parent| ReplyTo {
            message_id: parent.id.0,
            from: parent.from.as_ref().map(convert_user),
        }),
    }
}

fn convert_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = match chat.kind {
        teloxide::types::ChatKind::Public(ref p) => match p.kind {
            teloxide::types::PublicChatKind::Channel(_) => ChatType::Channel,
            teloxide::types::PublicChatKind::Group(_) => ChatType::Group,
            teloxide::types::PublicChatKind::Supergroup(_) => ChatType::Supergroup,
        },
        teloxide::types::ChatKind::Private(_) => ChatType::Private,
    };

    Chat {
        id: chat.id.0,
        chat_type,
        title: chat.title().map(|s| s.to_string()),
    }
}

fn convert_user(user: &teloxide::types::User) -> User {
    User {
        id: user.id.0 as i64,
        is_bot: user.is_bot,
        first_name: user.first_name.clone(),
        username: user.username.clone(),
    }
}
