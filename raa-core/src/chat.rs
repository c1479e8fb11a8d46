//! Text-generation model trait.

use async_trait::async_trait;

use crate::error::Result;

/// A text-generation backend.
///
/// Implementations wrap a specific provider behind a single non-streaming
/// call: system instructions plus a user prompt in, generated text out.
/// The call is single-shot — no retry logic lives here; a failure is
/// surfaced to the caller as [`Error::ExternalService`](crate::Error).
///
/// # Example
///
/// ```rust,ignore
/// use raa_core::ChatModel;
///
/// let model = OpenAiChatModel::from_env()?;
/// let text = model.complete("You are concise.", "Say hello.").await?;
/// ```
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a completion for the given system instructions and user prompt.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// The model identifier, for diagnostics.
    fn name(&self) -> &str;
}
