use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::llm_provider_trait::CompletionClient;
use crate::pkg_config::LlmConfig;

/// Placeholder value shipped in sample configs; never a real key.
const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for OpenAI-compatible chat completion endpoints.
///
/// Works against any server that speaks the `/chat/completions` protocol,
/// selected through `base_url`.
pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAIProvider {
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        validate_api_key(&api_key)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to create OpenAI client: {}", e))?;

        info!("Created OpenAI provider for {}", base_url);
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &LlmConfig, api_key: String) -> Result<Self> {
        Self::new(&config.base_url, api_key)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAIProvider {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String> {
        info!("Starting OpenAI chat request with model: {}", model);
        debug!("Prompt length: {} chars", prompt.len());

        let request = build_request(prompt, model);
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("OpenAI chat request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => "unknown error".to_string(),
            };
            error!("OpenAI chat failed ({}): {}", status, message);
            bail!("OpenAI chat request failed ({}): {}", status, message);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Malformed OpenAI response: {}", e))?;
        let text = first_choice_content(body)?;

        info!(
            "OpenAI chat completed successfully, response length: {} chars",
            text.len()
        );
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

/// One user-role message carrying the whole prompt.
pub fn build_request<'a>(prompt: &'a str, model: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
    }
}

/// Pull the first choice's message content out of a response.
pub fn first_choice_content(response: ChatResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("OpenAI response contained no choices"))?;
    choice
        .message
        .content
        .ok_or_else(|| anyhow!("OpenAI response choice has no message content"))
}

pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.trim().is_empty() || api_key == PLACEHOLDER_API_KEY {
        bail!("Invalid OpenAI API key. Please set a valid API key");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = build_request("translate me", "gpt-4o-mini");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "translate me"}]
            })
        );
    }

    #[test]
    fn test_first_choice_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "fn main() {}"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }))
        .unwrap();
        assert_eq!(first_choice_content(response).unwrap(), "fn main() {}");
    }

    #[test]
    fn test_missing_choices_is_an_error() {
        let response: ChatResponse = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(first_choice_content(response).is_err());
    }

    #[test]
    fn test_null_content_is_an_error() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(first_choice_content(response).is_err());
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!(OpenAIProvider::new("https://api.openai.com/v1", String::new()).is_err());
        assert!(
            OpenAIProvider::new("https://api.openai.com/v1", PLACEHOLDER_API_KEY.to_string())
                .is_err()
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = OpenAIProvider::new("http://localhost:11434/v1/", "sk-test".to_string())
            .unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:11434/v1/chat/completions");
        assert_eq!(provider.provider_name(), "openai");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        // port 9 (discard) is not expected to serve HTTP
        let provider = OpenAIProvider::new("http://127.0.0.1:9/v1", "sk-test".to_string())
            .unwrap();
        assert!(provider.complete("hi", "gpt-4o-mini").await.is_err());
    }
}
