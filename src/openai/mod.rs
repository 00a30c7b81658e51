//! OpenAI completions client for code review requests.

mod client;
mod error;
mod model;
mod params;
mod prompt;
mod types;

pub use client::{API_BASE_URL, ReviewClient};
pub use error::ClientError;
pub use model::{ALIASES, ModelSpec};
pub use params::{ParamError, SamplingParams};
pub use types::{ChatRequest, CompletionRequest, Message, RequestBody, Role};
