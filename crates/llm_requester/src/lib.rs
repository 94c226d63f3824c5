//! Access to the text-generation service used for translation.

pub mod llm_provider_trait;
pub mod openai_provider;
pub mod pkg_config;

pub use llm_provider_trait::CompletionClient;
pub use openai_provider::OpenAIProvider;
pub use pkg_config::LlmConfig;
