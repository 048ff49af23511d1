#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, trace, warn};

pub mod completion;
pub mod llms;
pub mod logging;
pub mod skill;

pub struct SmartBuddy {}

// Bare minimum wiring: an OpenAI-backed skill. The platform runtime
// (request parsing, response envelopes, session state) stays outside
// this crate.
impl SmartBuddy {
    pub fn openai() -> llms::api::openai::builder::OpenAiBackendBuilder {
        llms::api::openai::builder::OpenAiBackendBuilder::default()
    }
}
