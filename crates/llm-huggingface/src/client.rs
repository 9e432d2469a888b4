//! HTTP client and retry loop for the chat-completion endpoint

use std::time::Duration;

use reqwest::{Client, StatusCode};
use roast_std::time::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::completion::Completion;
use crate::config::HuggingFaceConfig;

const MAX_TOKENS: u32 = 250;
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;

/// Cap on the upstream error body echoed back to the chat.
pub const ERROR_BODY_MAX_CHARS: usize = 3500;

/// Request body for one completion call.
#[derive(Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 1],
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> PromptRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Sleep before retrying a 429/503: 1.2s, 2.0s, 2.8s, ...
pub fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(1200 + 800 * u64::from(attempt))
}

/// Chat-completion client with bounded retry.
pub struct HuggingFaceClient<C: Clock = SystemClock> {
    http: Client,
    config: HuggingFaceConfig,
    clock: C,
}

impl HuggingFaceClient<SystemClock> {
    pub fn new(config: HuggingFaceConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> HuggingFaceClient<C> {
    pub fn with_clock(config: HuggingFaceConfig, clock: C) -> Self {
        Self {
            http: Client::new(),
            config,
            clock,
        }
    }

    /// Generate a reply for `prompt`. Always returns text: model output,
    /// an upstream diagnostic, or a fallback line.
    pub async fn generate(&self, prompt: &str) -> String {
        self.complete(prompt).await.into_reply()
    }

    /// Run the retry loop and return the deciding outcome.
    ///
    /// Exhaustion reports the outcome of the last attempt.
    pub async fn complete(&self, prompt: &str) -> Completion {
        let request = PromptRequest::new(&self.config.model, prompt);
        let attempts = self.config.max_attempts.max(1);
        let mut last = Completion::RateLimited;

        for attempt in 0..attempts {
            let outcome = self.attempt(&request).await;
            match &outcome {
                Completion::Success(_) => {
                    debug!(attempt = attempt + 1, "Completion succeeded");
                    return outcome;
                }
                Completion::Permanent { status, .. } => {
                    warn!(attempt = attempt + 1, status, "Completion endpoint rejected request");
                    return outcome;
                }
                Completion::RateLimited => {
                    let delay = backoff(attempt);
                    warn!(attempt = attempt + 1, retry_in = ?delay, "Completion endpoint busy");
                    self.clock.sleep(delay).await;
                }
                Completion::Timeout => {
                    warn!(attempt = attempt + 1, timeout = ?self.config.timeout, "Completion timed out");
                }
                Completion::Unexpected(error) => {
                    warn!(attempt = attempt + 1, error = %error, "Completion failed");
                }
            }
            last = outcome;
        }

        last
    }

    /// One POST. The response is dropped before returning, releasing its
    /// connection back to the pool on every path.
    async fn attempt(&self, request: &PromptRequest<'_>) -> Completion {
        let response = match self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_token)
            .json(request)
            .timeout(self.config.timeout)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return classify_error(e),
        };

        let status = response.status();

        if status == StatusCode::OK {
            return match response.json::<ChatResponse>().await {
                Ok(body) => match body.choices.into_iter().next() {
                    Some(choice) => Completion::Success(choice.message.content.trim().to_string()),
                    None => Completion::Unexpected("response contained no choices".to_string()),
                },
                Err(e) => classify_error(e),
            };
        }

        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::SERVICE_UNAVAILABLE {
            return Completion::RateLimited;
        }

        match response.text().await {
            Ok(body) => Completion::Permanent {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_MAX_CHARS).collect(),
            },
            Err(e) => classify_error(e),
        }
    }
}

fn classify_error(error: reqwest::Error) -> Completion {
    if error.is_timeout() {
        Completion::Timeout
    } else {
        Completion::Unexpected(error.to_string())
    }
}
