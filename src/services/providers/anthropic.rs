/// Anthropic Messages API provider
///
/// Sends the search instruction with the web-search tool declared so the
/// model can issue live searches mid-generation. The tool loop is the
/// service's business: one request goes out, one final message comes back,
/// and only its text segments are consumed.
use crate::{
    error::{AppError, AppResult},
    services::providers::CompletionProvider,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_OUTPUT_TOKENS: u32 = 4000;
const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";

/// Final message returned by the Messages API
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// One content segment, tagged by kind (text vs. tool-use)
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Clone)]
pub struct AnthropicProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }
}

/// Concatenates the text segments of a reply, dropping tool-use records
fn concat_text_blocks(content: &[ContentBlock]) -> String {
    content
        .iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text.as_deref())
        .collect()
}

/// Prefers the structured `error.message` the API puts in failure bodies,
/// falling back to the raw body text
fn upstream_error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    format!("API returned status {}: {}", status, detail)
}

#[async_trait::async_trait]
impl CompletionProvider for AnthropicProvider {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/v1/messages", self.api_url.trim_end_matches('/'));

        let payload = json!({
            "model": self.model,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "tools": [
                {
                    "type": WEB_SEARCH_TOOL_TYPE,
                    "name": "web_search",
                }
            ],
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                }
            ],
        });

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await?;

        // A rejected credential is reported distinctly so the operator knows
        // to fix the key rather than retry.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AppError::InvalidCredentials(
                "Invalid API key. Please check your ANTHROPIC_API_KEY environment variable."
                    .to_string(),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Anthropic API request failed"
            );
            return Err(AppError::ExternalApi(upstream_error_message(status, &body)));
        }

        let message: MessagesResponse = response.json().await?;
        let text = concat_text_blocks(&message.content);

        tracing::info!(
            blocks = message.content.len(),
            chars = text.len(),
            provider = self.name(),
            "Completion received"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_text_blocks_ignores_tool_use() {
        let message: MessagesResponse = serde_json::from_str(
            r#"{
                "content": [
                    { "type": "server_tool_use", "id": "srvtoolu_1", "name": "web_search",
                      "input": { "query": "Austin events this weekend" } },
                    { "type": "web_search_tool_result", "tool_use_id": "srvtoolu_1", "content": [] },
                    { "type": "text", "text": "Here are your events: " },
                    { "type": "text", "text": "{\"recommendations\": []}" }
                ]
            }"#,
        )
        .unwrap();

        let text = concat_text_blocks(&message.content);
        assert_eq!(text, "Here are your events: {\"recommendations\": []}");
    }

    #[test]
    fn test_concat_text_blocks_empty_content() {
        let message: MessagesResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert_eq!(concat_text_blocks(&message.content), "");
    }

    #[test]
    fn test_upstream_error_message_prefers_api_detail() {
        let body = r#"{"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}}"#;
        let message = upstream_error_message(StatusCode::from_u16(529).unwrap(), body);
        assert!(message.starts_with("API returned status 529"));
        assert!(message.ends_with("Overloaded"));
    }

    #[test]
    fn test_upstream_error_message_falls_back_to_raw_body() {
        let message =
            upstream_error_message(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        assert_eq!(
            message,
            "API returned status 500 Internal Server Error: upstream exploded"
        );
    }
}
