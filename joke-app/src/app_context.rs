use crate::application::ExplainJoke;
use crate::domain::{DebugInfo, ModelId};
use crate::infrastructure::credentials::GitHubToken;
use crate::infrastructure::github_models::GitHubModelsClient;
use joke_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    explain_joke: Option<Arc<ExplainJoke>>,
}

impl AppContext {
    /// `None` means no credential was found; the interactive flow stays halted.
    pub fn new(client: Option<GitHubModelsClient>) -> Self {
        Self {
            explain_joke: client.map(|c| Arc::new(ExplainJoke::new(c))),
        }
    }

    /// Reads the credential once. Call at startup.
    pub fn from_env() -> Self {
        match GitHubToken::from_env() {
            Some(token) => {
                tracing::info!("GitHub token found, using GitHub Models backend");
                Self::new(Some(GitHubModelsClient::new(token)))
            }
            None => {
                tracing::warn!("No GitHub token found in GITHUB_TOKEN or GITHUB_MODELS_TOKEN");
                Self::new(None)
            }
        }
    }

    pub fn has_credential(&self) -> bool {
        self.explain_joke.is_some()
    }

    pub fn explain_joke(&self) -> Result<&ExplainJoke, AppError> {
        self.explain_joke
            .as_deref()
            .ok_or(AppError::MissingCredential)
    }

    pub fn debug_info(&self, model: ModelId) -> DebugInfo {
        DebugInfo::new(self.has_credential(), model)
    }
}
