// Public modules
pub mod api;

// Public exports
pub use api::{
    openai::{builder::OpenAiBackendBuilder, OpenAiBackend, OpenAiConfig},
    ApiConfig, ApiError, ClientError, LlmApiConfigTrait,
};
