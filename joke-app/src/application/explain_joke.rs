use crate::domain::{Explanation, ModelId};
use crate::infrastructure::github_models::{ChatCompletionRequest, GitHubModelsClient};
use joke_errors::AppError;

pub struct ExplainJoke {
    client: GitHubModelsClient,
}

impl ExplainJoke {
    pub fn new(client: GitHubModelsClient) -> Self {
        Self { client }
    }

    /// One activation of the "Explain Joke" button: at most one API call.
    pub async fn execute(&self, model: ModelId, joke: &str) -> Result<Explanation, AppError> {
        if joke.trim().is_empty() {
            tracing::warn!("Rejected blank joke input");
            return Err(AppError::EmptyInput);
        }

        let request = ChatCompletionRequest::explain_joke(model, joke);
        tracing::info!(model = %model, chars = joke.chars().count(), "Explaining joke");

        let text = self.client.complete(&request).await?;
        Ok(Explanation::new(model, text))
    }
}
