use super::ModelId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub model: ModelId,
    pub text: String,
}

impl Explanation {
    pub fn new(model: ModelId, text: String) -> Self {
        Self { model, text }
    }
}
