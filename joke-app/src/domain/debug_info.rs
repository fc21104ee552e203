use super::ModelId;
use serde::{Deserialize, Serialize};

/// Contents of the "Debug" panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub has_github_token: bool,
    pub model: ModelId,
}

impl DebugInfo {
    pub fn new(has_github_token: bool, model: ModelId) -> Self {
        Self {
            has_github_token,
            model,
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| {
            format!(
                "{{ \"has_github_token\": {}, \"model\": \"{}\" }}",
                self.has_github_token, self.model
            )
        })
    }
}
