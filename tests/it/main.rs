mod completion;

use mockito::ServerGuard;
use smart_buddy::llms::api::LlmApiConfigTrait;
use smart_buddy::llms::OpenAiBackend;
use smart_buddy::logging::LoggingConfigTrait;
use smart_buddy::SmartBuddy;

/// A backend pointed at a local mock server instead of the real API.
pub fn mock_backend(server: &ServerGuard) -> OpenAiBackend {
    SmartBuddy::openai()
        .with_api_host(server.url())
        .with_api_key("test-key")
        .logging_enabled(false)
        .init()
        .unwrap()
}

/// A backend pointed at a closed local port, for transport failures.
pub fn unreachable_backend() -> OpenAiBackend {
    SmartBuddy::openai()
        .with_api_host("http://127.0.0.1:9")
        .with_api_key("test-key")
        .logging_enabled(false)
        .init()
        .unwrap()
}
