use crate::completion::CompletionRequest;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct OpenAiCompletionRequest {
    /// ID of the model to use.
    pub model: String,

    /// Input messages. A single-turn request carries exactly one user
    /// message holding the utterance transcript.
    pub messages: Vec<OpenAiCompletionRequestMessage>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct OpenAiCompletionRequestMessage {
    pub role: String,
    pub content: String,
}

impl OpenAiCompletionRequest {
    pub fn new(req: &CompletionRequest) -> Self {
        Self {
            model: req.model.clone(),
            messages: vec![OpenAiCompletionRequestMessage {
                role: "user".to_string(),
                content: req.query.clone(),
            }],
        }
    }
}
