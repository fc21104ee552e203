mod client;
mod prompt;
mod types;

pub use client::{GitHubModelsClient, GITHUB_MODELS_API_BASE};
pub use prompt::SYSTEM_PROMPT;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, Message};
