//! Telegram roast bot
//!
//! Sits in group chats. Answers direct mentions and replies with a hosted
//! LLM, and now and then roasts whoever just spoke with a line from a local
//! file. Updates arrive over a webhook.

mod config;
mod conversation;
mod cooldown;
mod corpus;
mod dice;
mod handlers;
mod health;
mod processor;
mod prompt;
mod reply;
mod trigger;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use llm_huggingface::HuggingFaceClient;
use roast_std::{SystemClock, SystemEnv, SystemFs};
use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::update_listeners::webhooks;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::BotConfig;
use crate::cooldown::CooldownTracker;
use crate::corpus::Corpus;
use crate::dice::ThreadDice;
use crate::processor::MessageProcessor;

/// Telegram roast bot CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roast lines file (overrides ROAST_FILE)
    #[arg(long)]
    roast_file: Option<PathBuf>,

    /// Webhook listener port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Health check server port (overrides HEALTH_CHECK_PORT)
    #[arg(long)]
    health_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roast_bot=debug,llm_huggingface=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting roast bot");

    let args = Args::parse();

    let mut config = BotConfig::from_env(&SystemEnv).context("Failed to load configuration")?;
    if let Some(roast_file) = args.roast_file {
        config.roast_file = roast_file;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.health_port.is_some() {
        config.health_port = args.health_port;
    }

    let corpus = Corpus::load(&SystemFs, &config.roast_file)
        .with_context(|| format!("Failed to load roast lines from {}", config.roast_file.display()))?;
    info!(lines = corpus.len(), "Roast lines loaded");
    info!(model = %config.llm.model, "Completion model");

    let bot = Bot::new(&config.bot_token);

    let bot_username = match bot.get_me().await {
        Ok(me) => {
            let username = me.username().to_string();
            info!("Bot authenticated as: @{}", username);
            username
        }
        Err(e) => {
            error!("Failed to authenticate bot: {}", e);
            return Err(e.into());
        }
    };

    let health_state = health::AppState::new(Some(bot_username.clone()));
    if let Some(health_port) = config.health_port {
        let health_state = health_state.clone();
        tokio::spawn(async move {
            if let Err(e) = health::start_health_server(health_state, health_port).await {
                error!("Health check server error: {}", e);
            }
        });
    }

    let processor = Arc::new(MessageProcessor::new(
        bot_username,
        corpus,
        HuggingFaceClient::new(config.llm.clone()),
        CooldownTracker::new(SystemClock),
        Box::new(ThreadDice),
    ));

    let webhook_url = config.webhook_url()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Webhook URL: {}", webhook_url);
    info!("Listening on: {}", addr);

    let listener = webhooks::axum(
        bot.clone(),
        webhooks::Options::new(addr, webhook_url).drop_pending_updates(),
    )
    .await
    .context("Failed to register webhook")?;

    let handler = Update::filter_message().branch(
        dptree::filter(|msg: Message| msg.text().is_some()).endpoint(handlers::handle_text_message),
    );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![processor, health_state])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    info!("Roast bot stopped");
    Ok(())
}
