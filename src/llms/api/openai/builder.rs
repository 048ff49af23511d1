use super::{OpenAiBackend, OpenAiConfig};
use crate::llms::api::config::{ApiConfig, LlmApiConfigTrait};
use crate::logging::{LoggingConfig, LoggingConfigTrait};

// Everything here can be implemented for any struct.
pub struct OpenAiBackendBuilder {
    pub config: OpenAiConfig,
}

impl Default for OpenAiBackendBuilder {
    fn default() -> Self {
        Self {
            config: Default::default(),
        }
    }
}

impl OpenAiBackendBuilder {
    pub fn init(self) -> crate::Result<OpenAiBackend> {
        OpenAiBackend::new(self.config)
    }
}

impl LlmApiConfigTrait for OpenAiBackendBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl LoggingConfigTrait for OpenAiBackendBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}
