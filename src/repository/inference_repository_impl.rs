use crate::common::*;

use crate::dto::chart_request::*;
use crate::errors::app_errors::*;
use crate::model::configs::app_config::*;
use crate::traits::repository_traits::inference_repository::*;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/* One connection pool per process; per-request timeouts stay per repository instance. */
static HTTP_CLIENT: once_lazy<Client> = once_lazy::new(Client::new);

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct InferenceRepositoryImpl {
    api_url: String,
    timeout: Duration,
}

impl InferenceRepositoryImpl {
    pub fn from_config(config: &AppConfig) -> Self {
        InferenceRepositoryImpl::new(
            config.api_url().to_string(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

#[async_trait]
impl InferenceRepository for InferenceRepositoryImpl {
    async fn generate(&self, payload: &ChartRequest) -> Result<Value, ApiError> {
        let response = HTTP_CLIENT
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                ApiError::Unreachable(format!(
                    "[InferenceRepositoryImpl->generate] request to {} failed: {}",
                    self.api_url, e
                ))
            })?;

        let status: StatusCode = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let body: String = response
            .text()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        serde_json::from_str::<Value>(&body).map_err(|e| {
            ApiError::MalformedResponse(format!(
                "[InferenceRepositoryImpl->generate] response body is not JSON: {}",
                e
            ))
        })
    }

    async fn test_connection(&self) -> Result<bool, ApiError> {
        let probe: ChartRequest = ChartRequest::connection_probe();
        let response: Value = self.generate(&probe).await?;

        Ok(response.to_string().to_lowercase().contains("successful"))
    }
}
