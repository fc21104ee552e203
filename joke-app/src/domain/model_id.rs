use joke_errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Models offered by the picker. IDs come from the GitHub Models catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "openai/gpt-4.1-mini")]
    Gpt41Mini,
    #[serde(rename = "openai/gpt-4.1")]
    Gpt41,
    #[serde(rename = "openai/gpt-4o-mini")]
    Gpt4oMini,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [ModelId::Gpt41Mini, ModelId::Gpt41, ModelId::Gpt4oMini];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt41Mini => "openai/gpt-4.1-mini",
            Self::Gpt41 => "openai/gpt-4.1",
            Self::Gpt4oMini => "openai/gpt-4o-mini",
        }
    }

    /// Like `parse`, but an absent (empty) field selects the default model.
    pub fn parse_or_default(s: &str) -> Result<Self, AppError> {
        if s.trim().is_empty() {
            Ok(Self::default())
        } else {
            s.parse()
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| AppError::UnknownModel(s.to_string()))
    }
}
