use super::{
    config::ApiConfigTrait,
    error::{map_deserialization_error, map_serialization_error, ClientError, WrappedError},
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub(crate) struct ApiClient<C: ApiConfigTrait> {
    http_client: reqwest::Client,
    pub config: C,
}

impl<C: ApiConfigTrait> ApiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Make a POST request to {path} and deserialize the response body
    pub(crate) async fn post<I, O>(&self, path: &str, request: I) -> Result<O, ClientError>
    where
        I: Serialize + std::fmt::Debug,
        O: DeserializeOwned,
    {
        let serialized_request =
            serde_json::to_string(&request).map_err(map_serialization_error)?;
        crate::trace!("Serialized request: {}", serialized_request);
        let request = self
            .http_client
            .post(self.config.url(path))
            .headers(self.config.headers())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serialized_request)
            .build()?;

        let bytes = self.execute_raw(request).await?;

        // Deserialize once into a generic Value so the raw body can be logged
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))?;
        crate::trace!("Serialized response: {}", value);

        let response: O =
            serde_json::from_value(value).map_err(|e| map_deserialization_error(e, &bytes))?;

        Ok(response)
    }

    /// Execute a HTTP request.
    ///
    /// One attempt per invocation. The failure contract of every caller is a
    /// single exchange; a failed call surfaces immediately instead of being
    /// retried.
    async fn execute_raw(&self, request: reqwest::Request) -> Result<Bytes, ClientError> {
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(ClientError::Reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::Reqwest)?;

        if !status.is_success() {
            // 401/403 means the bearer credential was rejected. Kept separate
            // from other API errors so callers can speak a distinct sentence
            // instead of guessing from a generic failure.
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                let message = serde_json::from_slice::<WrappedError>(bytes.as_ref())
                    .map(|wrapped| wrapped.error.message)
                    .unwrap_or_else(|_| String::from_utf8_lossy(bytes.as_ref()).into_owned());
                tracing::warn!("Auth denied ({}): {}", status, message);
                return Err(ClientError::AuthDenied {
                    status: status.as_u16(),
                    message,
                });
            }

            let wrapped_error: WrappedError = serde_json::from_slice(bytes.as_ref())
                .map_err(|e| map_deserialization_error(e, bytes.as_ref()))?;
            tracing::warn!("API error ({}): {}", status, wrapped_error.error.message);
            return Err(ClientError::ApiError(wrapped_error.error));
        }

        Ok(bytes)
    }
}
