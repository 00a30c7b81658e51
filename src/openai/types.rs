//! Wire types for the OpenAI completions APIs.
//!
//! The upstream API has two incompatible request shapes with overlapping
//! field names: the legacy single-prompt `completions` endpoint and the
//! message-list `chat/completions` endpoint. [`RequestBody`] tags the two so
//! serialization and endpoint selection dispatch on the shape.

use serde::{Deserialize, Serialize};

/// Legacy single-prompt completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub best_of: u32,
}

/// Chat completion request.
///
/// The chat API has no `prompt` and no `best_of`; the struct carries
/// neither, so `best_of` never reaches the wire for chat models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

/// A message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A request to either completions API family, tagged by shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Completion(CompletionRequest),
    Chat(ChatRequest),
}

impl RequestBody {
    /// Endpoint path under the API base for this request shape.
    pub fn endpoint(&self) -> &'static str {
        match self {
            RequestBody::Completion(_) => "completions",
            RequestBody::Chat(_) => "chat/completions",
        }
    }
}

/// Response envelope shared by both API families.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub error: Option<ErrorBody>,
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: Option<u64>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

/// A single completion choice.
///
/// Legacy responses populate `text`; chat responses populate `message`.
#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub text: String,
    pub message: Option<Message>,
    #[serde(default)]
    pub index: u32,
}

/// Token usage statistics.
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Error payload embedded in an API response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub param: Option<String>,
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_request() -> ChatRequest {
        ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: "You are a code reviewer.".to_string(),
                },
                Message {
                    role: Role::User,
                    content: "diff --git a/x b/x".to_string(),
                },
            ],
            temperature: 0.7,
            max_tokens: 500,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }

    #[test]
    fn completion_request_wire_keys() {
        let request = CompletionRequest {
            model: "text-davinci-003".to_string(),
            prompt: "review this".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            top_p: 1.0,
            frequency_penalty: 0.5,
            presence_penalty: -0.5,
            best_of: 2,
        };

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "model",
            "prompt",
            "temperature",
            "max_tokens",
            "top_p",
            "frequency_penalty",
            "presence_penalty",
            "best_of",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 8);
        assert_eq!(json["best_of"], 2);
    }

    #[test]
    fn chat_request_has_no_prompt_or_best_of() {
        let json = serde_json::to_value(chat_request()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("prompt"));
        assert!(!object.contains_key("best_of"));
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn chat_request_round_trip_preserves_message_order() {
        let request = chat_request();
        let json = serde_json::to_string(&request).unwrap();
        let decoded: ChatRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
        assert_eq!(decoded.messages[0].role, Role::System);
        assert_eq!(decoded.messages[1].role, Role::User);
    }

    #[test]
    fn request_body_selects_endpoint_by_shape() {
        let chat = RequestBody::Chat(chat_request());
        assert_eq!(chat.endpoint(), "chat/completions");

        let completion = RequestBody::Completion(CompletionRequest {
            model: "text-ada-001".to_string(),
            prompt: String::new(),
            temperature: 0.0,
            max_tokens: 1,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            best_of: 1,
        });
        assert_eq!(completion.endpoint(), "completions");
    }

    #[test]
    fn request_body_serializes_transparently() {
        let json = serde_json::to_value(RequestBody::Chat(chat_request())).unwrap();
        // The tag must not leak into the wire encoding.
        assert!(json.as_object().unwrap().contains_key("model"));
        assert!(!json.as_object().unwrap().contains_key("Chat"));
    }

    #[test]
    fn response_with_error_payload() {
        let json = r#"{
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        }"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.message, "Incorrect API key provided");
        assert_eq!(error.kind.as_deref(), Some("invalid_request_error"));
        assert_eq!(error.code.as_deref(), Some("invalid_api_key"));
        assert!(error.param.is_none());
        assert!(response.choices.is_empty());
    }

    #[test]
    fn legacy_response_populates_text() {
        let json = r#"{
            "id": "cmpl-123",
            "object": "text_completion",
            "created": 1686000000,
            "choices": [{"text": "Consider renaming x.", "index": 0}],
            "usage": {"prompt_tokens": 40, "completion_tokens": 9, "total_tokens": 49}
        }"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.choices[0].text, "Consider renaming x.");
        assert!(response.choices[0].message.is_none());
        assert_eq!(response.usage.unwrap().total_tokens, 49);
    }

    #[test]
    fn chat_response_populates_message() {
        let json = r#"{
            "id": "chatcmpl-456",
            "object": "chat.completion",
            "created": 1686000000,
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "looks fine"}
            }]
        }"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();
        let choice = &response.choices[0];
        assert_eq!(choice.text, "");
        assert_eq!(choice.message.as_ref().unwrap().content, "looks fine");
        assert!(response.usage.is_none());
    }
}
