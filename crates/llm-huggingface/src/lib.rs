//! # llm-huggingface
//!
//! Chat-completion client for the Hugging Face router
//! (OpenAI-compatible `/v1/chat/completions`).
//!
//! ## How it works
//!
//! 1. [`HuggingFaceClient::generate`] sends a single user message with fixed
//!    generation parameters (`max_tokens=250`, `temperature=0.7`, `top_p=0.9`).
//! 2. Each attempt resolves to a [`Completion`]. Up to three attempts are made;
//!    `429`/`503` sleep `1.2s + 0.8s * attempt` first, timeouts and other
//!    failures retry immediately.
//! 3. The final [`Completion`] is turned into reply text exactly once by
//!    [`Completion::into_reply`]. Callers never see an `Err`.
//!
//! ## Configuration (env vars)
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `HF_API_TOKEN` | (none) | Bearer token (required) |
//! | `HF_MODEL` | `mistralai/Mistral-7B-Instruct-v0.2` | Model identifier |

pub mod client;
pub mod completion;
pub mod config;

pub use client::HuggingFaceClient;
pub use completion::Completion;
pub use config::{ConfigError, HuggingFaceConfig};
