/// What the platform's response builder needs from the skill: speech, an
/// optional reprompt, and whether the session stays open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillResponse {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub end_session: bool,
}

impl SkillResponse {
    pub fn speak<S: Into<String>>(speech: S) -> Self {
        Self {
            speech: Some(speech.into()),
            ..Default::default()
        }
    }

    /// A response with nothing to say. The session-ended path uses this.
    pub fn empty() -> Self {
        Default::default()
    }

    pub fn with_reprompt<S: Into<String>>(mut self, reprompt: S) -> Self {
        self.reprompt = Some(reprompt.into());
        self
    }

    pub fn with_end_session(mut self) -> Self {
        self.end_session = true;
        self
    }
}
