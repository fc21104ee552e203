use serde::{Deserialize, Serialize};
use std::str::FromStr;

const MISSING_CREDENTIAL_HELP: &str = "Create a fine-grained token with Models: Read and set it in your shell:\n    export GITHUB_TOKEN=github_pat_your_token\n\nThen restart the server.";

const MISSING_CREDENTIAL: &str = "No GitHub token found.";
const EMPTY_INPUT: &str = "Please enter a joke first.";
const UNKNOWN_MODEL_PREFIX: &str = "Unknown model: ";
const API_ERROR_PREFIX: &str = "GitHub Models API error ";
const REQUEST_FAILED_PREFIX: &str = "Request failed: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("No GitHub token found.")]
    MissingCredential,

    #[error("Please enter a joke first.")]
    EmptyInput,

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("GitHub Models API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(MISSING_CREDENTIAL) {
            Ok(AppError::MissingCredential)
        } else if s.starts_with(EMPTY_INPUT) {
            Ok(AppError::EmptyInput)
        } else if let Some(model) = s.strip_prefix(UNKNOWN_MODEL_PREFIX) {
            Ok(AppError::UnknownModel(model.to_string()))
        } else if let Some(rest) = s.strip_prefix(API_ERROR_PREFIX) {
            let parsed = rest
                .split_once(": ")
                .and_then(|(status, body)| Some((status.parse::<u16>().ok()?, body)));
            match parsed {
                Some((status, body)) => Ok(AppError::ApiError {
                    status,
                    body: body.to_string(),
                }),
                None => Ok(AppError::RequestFailed(s.to_string())),
            }
        } else if let Some(message) = s.strip_prefix(REQUEST_FAILED_PREFIX) {
            Ok(AppError::RequestFailed(message.to_string()))
        } else {
            Ok(AppError::RequestFailed(s.to_string()))
        }
    }
}

impl AppError {
    /// Text shown in the page's warning or error region.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => format!("{}\n\n{}", self, MISSING_CREDENTIAL_HELP),
            _ => self.to_string(),
        }
    }

    /// Warnings are user-correctable input problems, rendered apart from errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// A fatal error stops the interactive flow for the whole session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}
