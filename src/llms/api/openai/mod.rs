pub mod builder;
pub mod completion;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait},
    error::ClientError,
};
use crate::completion::{CompletionRequest, CompletionResult, UnavailableReason};
use crate::logging::LoggingConfig;
use completion::{req::OpenAiCompletionRequest, res::OpenAiCompletionResponse};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

/// Default v1 API base url
pub const OPENAI_API_HOST: &str = "api.openai.com/v1";

pub struct OpenAiBackend {
    pub(crate) client: ApiClient<OpenAiConfig>,
}

impl OpenAiBackend {
    pub fn new(mut config: OpenAiConfig) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        config.api_config.api_key = Some(config.api_config.load_api_key()?);
        Ok(Self {
            client: ApiClient::new(config),
        })
    }

    /// Issue one single-turn completion and fold every failure into a
    /// value-typed result. Exactly one outbound call per invocation; no
    /// caching, no retry. The caller is never handed a terminal error.
    pub async fn complete(&self, request: &CompletionRequest) -> CompletionResult {
        match self.completion_request(request).await {
            Ok(res) => match res.answer_text() {
                Some(content) => CompletionResult::Answer(content.to_string()),
                None => {
                    crate::warn!("Completion response had no usable content");
                    CompletionResult::Unavailable(UnavailableReason::MalformedResponse)
                }
            },
            Err(e) => {
                crate::warn!("Completion request failed: {}", e);
                CompletionResult::Unavailable(UnavailableReason::from(e))
            }
        }
    }

    pub(crate) async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<OpenAiCompletionResponse, ClientError> {
        self.client
            .post("/chat/completions", OpenAiCompletionRequest::new(request))
            .await
    }
}

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: OPENAI_API_HOST.to_string(),
                api_key: None,
                api_key_env_var: "OPENAI_API_KEY".to_string(),
            },
            logging_config: LoggingConfig {
                logger_name: "openai".to_string(),
                ..Default::default()
            },
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ApiConfigTrait for OpenAiConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = self.api_key() {
            if let Ok(header_value) =
                HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            {
                headers.insert(AUTHORIZATION, header_value);
            } else {
                crate::error!("Failed to create header value from authorization value");
            }
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        // Hosts carrying their own scheme (test servers) are used verbatim.
        if self.api_config.host.contains("://") {
            format!("{}{}", self.api_config.host, path)
        } else {
            format!("https://{}{}", self.api_config.host, path)
        }
    }

    fn api_key(&self) -> &Option<Secret<String>> {
        &self.api_config.api_key
    }
}
