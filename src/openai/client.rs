//! Request construction and transport for the OpenAI completions APIs.

use reqwest::Client;
use tracing::debug;

use super::error::ClientError;
use super::model::ModelSpec;
use super::params::{ParamError, SamplingParams};
use super::prompt;
use super::types::{ApiResponse, ChatRequest, CompletionRequest, RequestBody};

/// Base URL for the OpenAI API.
pub const API_BASE_URL: &str = "https://api.openai.com/v1/";

/// Client for requesting code reviews from the OpenAI completions APIs.
///
/// One call maps to one HTTP request; there is no retry and no timeout
/// beyond the transport default. Dropping the returned future aborts the
/// in-flight request.
pub struct ReviewClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ReviewClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, API_BASE_URL.to_string())
    }

    /// Use a custom API base. The default is [`API_BASE_URL`]; the base
    /// must end with a trailing slash.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Request review comments for `diff` from the model behind `alias`.
    ///
    /// Validates `params`, builds the request shape for the model's API
    /// family, performs a single HTTP call, and flattens the response
    /// choices into review comments in response order. Empty legacy
    /// choices are skipped; chat choices are taken as-is.
    pub async fn request_review(
        &self,
        alias: &str,
        diff: &str,
        params: &SamplingParams,
    ) -> Result<Vec<String>, ClientError> {
        let model = ModelSpec::resolve(alias);
        params.validate(model.is_some())?;
        let Some(model) = model else {
            return Err(ParamError::InvalidModel.into());
        };

        let body = build_body(&model, diff, params);
        let encoded = serde_json::to_string(&body).map_err(ClientError::Serialize)?;
        let url = format!("{}{}", self.base_url, body.endpoint());

        debug!(model = model.name, url = %url, "requesting review");
        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .body(encoded)
            .send()
            .await?;

        // The error payload decides success, not the HTTP status: error
        // responses arrive with the same envelope as successful ones.
        let text = response.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&text).map_err(ClientError::Decode)?;

        if let Some(error) = parsed.error {
            return Err(ClientError::Upstream(error.message));
        }

        if let Some(usage) = &parsed.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "received response"
            );
        }

        Ok(collect_comments(parsed, model.chat))
    }
}

fn build_body(model: &ModelSpec, diff: &str, params: &SamplingParams) -> RequestBody {
    if model.chat {
        RequestBody::Chat(ChatRequest {
            model: model.name.to_string(),
            messages: prompt::chat_messages(diff),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            frequency_penalty: params.frequency_penalty,
            presence_penalty: params.presence_penalty,
        })
    } else {
        RequestBody::Completion(CompletionRequest {
            model: model.name.to_string(),
            prompt: prompt::completion_prompt(diff),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            frequency_penalty: params.frequency_penalty,
            presence_penalty: params.presence_penalty,
            best_of: params.best_of,
        })
    }
}

/// Flatten response choices into comments, preserving response order.
///
/// Chat responses always populate `message`, so the content is taken even
/// when empty; legacy responses may pad with empty `text` entries, which
/// are dropped.
fn collect_comments(response: ApiResponse, chat: bool) -> Vec<String> {
    let mut comments = Vec::new();
    for choice in response.choices {
        if chat {
            comments.push(choice.message.map(|m| m.content).unwrap_or_default());
        } else if !choice.text.is_empty() {
            comments.push(choice.text);
        }
    }
    comments
}
