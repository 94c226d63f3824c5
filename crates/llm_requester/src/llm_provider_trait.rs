use anyhow::Result;
use async_trait::async_trait;

/// A text-completion service the translator can submit prompts to.
///
/// Implementations return the raw completion text. They make no promise
/// about its format: it may be fenced, contain prose, or be truncated.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit a single user prompt to `model` and return the completion text.
    async fn complete(&self, prompt: &str, model: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
