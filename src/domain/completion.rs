//! Completion - AI Completion Requests

use serde::{Deserialize, Serialize};

use super::ids::{ClientId, PromptId};
use crate::constants::{CHARS_PER_TOKEN, SMALL_MODEL_CONTEXT_TOKENS};

/// Completion vendor; any other value fails decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
}

/// One model offered by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub provider: AiProvider,
    pub model: String,
}

/// Models the backend currently offers (`getCurrentModels`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentModels {
    /// Cheaper model with a small context window
    pub small_token: Model,
    /// Model used once the prompt outgrows the small one
    pub large_token: Model,
}

/// Rough token count, one token per four UTF-16 code units
///
/// Counted in UTF-16 units like the backend does, so text outside the basic
/// multilingual plane (emoji) weighs two units per character.
pub fn estimate_tokens(text: &str) -> usize {
    text.encode_utf16().count().div_ceil(CHARS_PER_TOKEN)
}

impl CurrentModels {
    /// Pick a model leaving half of the small context for the answer
    pub fn select_for(&self, text: &str) -> &Model {
        if estimate_tokens(text) < SMALL_MODEL_CONTEXT_TOKENS / 2 {
            &self.small_token
        } else {
            &self.large_token
        }
    }
}

/// Body posted to the completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub prompt: String,
    pub prompt_id: PromptId,
    pub client_id: ClientId,
    pub models: CurrentModels,
}

impl CompletionRequest {
    /// Model the request will run on
    pub fn model(&self) -> &Model {
        let combined = format!("{}{}", self.system_prompt, self.prompt);
        self.models.select_for(&combined)
    }
}
