//! Text-generation backends for the Regulatory Analytics Assistant.
//!
//! Implementations of [`raa_core::ChatModel`]. The single backend today
//! is [`OpenAiChatModel`] over the chat completions API.

pub mod openai;

pub use openai::OpenAiChatModel;
