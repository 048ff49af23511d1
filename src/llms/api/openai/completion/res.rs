use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct OpenAiCompletionResponse {
    /// Candidate completions, in order. May be empty.
    #[serde(default)]
    pub choices: Vec<OpenAiCompletionChoice>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct OpenAiCompletionChoice {
    #[serde(default)]
    pub message: OpenAiCompletionMessage,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct OpenAiCompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl OpenAiCompletionResponse {
    /// The first candidate's content, if present and non-empty.
    pub fn answer_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}
