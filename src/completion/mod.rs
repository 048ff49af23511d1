//! Single-turn completion data model.
//!
//! Values here live for one request/response cycle; nothing is persisted
//! between calls.

use crate::llms::api::ClientError;

/// The model the skill pins unless a caller overrides it.
pub const DEFAULT_MODEL_ID: &str = "gpt-3.5-turbo";

/// A single-turn chat completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Identifier of the target language model.
    pub model: String,
    /// The user's utterance transcript. Must be non-empty; callers
    /// short-circuit blank transcripts before building a request.
    pub query: String,
}

impl CompletionRequest {
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            model: DEFAULT_MODEL_ID.to_string(),
            query: query.into(),
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }
}

/// Outcome of one completion exchange, owned solely by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionResult {
    /// Extraction succeeded; the model's answer, passed through exactly.
    Answer(String),
    /// Extraction failed, or the exchange itself did.
    Unavailable(UnavailableReason),
}

/// Why a completion was unavailable. Auth rejections are kept apart from
/// empty or unreadable payloads so the skill can say which one happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Network, DNS, or TLS failure before a response body arrived.
    Transport,
    /// The API rejected the bearer credential (401/403).
    AuthDenied,
    /// HTTP success but an unparsable body, empty `choices`, or a
    /// missing/empty `choices[0].message.content`.
    MalformedResponse,
}

impl From<ClientError> for UnavailableReason {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Reqwest(_) => UnavailableReason::Transport,
            ClientError::AuthDenied { .. } => UnavailableReason::AuthDenied,
            // Service-side error objects (5xx, 429) read as connection
            // trouble to the user, not as a malformed answer.
            ClientError::ApiError(_) => UnavailableReason::Transport,
            ClientError::JSONSerialize(_)
            | ClientError::JSONDeserialize(_)
            | ClientError::InvalidArgument(_) => UnavailableReason::MalformedResponse,
        }
    }
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableReason::Transport => write!(f, "Transport"),
            UnavailableReason::AuthDenied => write!(f, "AuthDenied"),
            UnavailableReason::MalformedResponse => write!(f, "MalformedResponse"),
        }
    }
}
