use super::prompt::build_explain_messages;
use crate::domain::ModelId;
use serde::{Deserialize, Serialize};

const MAX_TOKENS: u32 = 180;
const TEMPERATURE: f32 = 0.4;

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: MessageContent,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl ChatCompletionRequest {
    pub fn explain_joke(model: ModelId, joke: &str) -> Self {
        Self {
            model: model.as_str().to_string(),
            messages: build_explain_messages(joke),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

impl ChatCompletionResponse {
    pub fn first_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}
