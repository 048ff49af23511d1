//! Intent dispatch for the Smart Buddy skill.
//!
//! The voice platform hands the skill one request kind per invocation and
//! expects plain speech values back; the platform's own envelope and
//! response builder never appear here.

mod response;
mod speech;

pub use response::SkillResponse;
pub use speech::*;

use crate::completion::{CompletionRequest, CompletionResult, UnavailableReason};
use crate::llms::api::openai::OpenAiBackend;

/// The closed set of request kinds the platform can hand the skill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkillRequest {
    Launch,
    /// The catch-all question intent. The transcript slot may be empty.
    Chat { query: Option<String> },
    Help,
    CancelOrStop,
    Fallback,
    SessionEnded,
}

pub struct Skill {
    backend: OpenAiBackend,
}

impl Skill {
    pub fn new(backend: OpenAiBackend) -> Self {
        Self { backend }
    }

    /// Dispatch one platform request.
    ///
    /// Total over `SkillRequest`: every variant produces a response, and
    /// every failure path produces spoken output. Invocations are
    /// independent; nothing is shared or mutated between calls.
    pub async fn handle(&self, request: SkillRequest) -> SkillResponse {
        match request {
            SkillRequest::Launch => {
                SkillResponse::speak(WELCOME_SPEECH).with_reprompt(WELCOME_REPROMPT)
            }
            SkillRequest::Chat { query } => self.handle_chat(query).await,
            SkillRequest::Help => SkillResponse::speak(HELP_SPEECH).with_reprompt(HELP_REPROMPT),
            SkillRequest::CancelOrStop => {
                SkillResponse::speak(GOODBYE_SPEECH).with_end_session()
            }
            SkillRequest::Fallback => {
                SkillResponse::speak(FALLBACK_SPEECH).with_reprompt(FALLBACK_REPROMPT)
            }
            SkillRequest::SessionEnded => {
                crate::info!("Session ended");
                SkillResponse::empty().with_end_session()
            }
        }
    }

    async fn handle_chat(&self, query: Option<String>) -> SkillResponse {
        // A blank transcript is recovered locally with a reprompt; the
        // completion client is never called.
        let query = match query {
            Some(query) if !query.trim().is_empty() => query,
            _ => {
                return SkillResponse::speak(EMPTY_QUERY_SPEECH)
                    .with_reprompt(EMPTY_QUERY_REPROMPT)
            }
        };

        match self.backend.complete(&CompletionRequest::new(query)).await {
            CompletionResult::Answer(content) => {
                SkillResponse::speak(content).with_reprompt(ANSWER_REPROMPT)
            }
            CompletionResult::Unavailable(reason) => {
                SkillResponse::speak(unavailable_speech(reason))
            }
        }
    }
}

/// The one spoken sentence for each failure reason.
pub fn unavailable_speech(reason: UnavailableReason) -> &'static str {
    match reason {
        UnavailableReason::Transport => TRANSPORT_FAILURE_SPEECH,
        UnavailableReason::AuthDenied => AUTH_DENIED_SPEECH,
        UnavailableReason::MalformedResponse => MALFORMED_RESPONSE_SPEECH,
    }
}
