use crate::common::*;

use crate::dto::chart_request::*;
use crate::errors::app_errors::*;

#[async_trait]
pub trait InferenceRepository: Send + Sync {
    #[doc = r#"
        Issue one POST against the remote inference endpoint.
        2xx with a JSON body yields the raw body; every other outcome maps to
        an `ApiError` kind. No retries: a failed call surfaces as-is.
    "#]
    async fn generate(&self, payload: &ChartRequest) -> Result<Value, ApiError>;

    #[doc = "Send the fixed probe payload and report whether the endpoint acknowledged it."]
    async fn test_connection(&self) -> Result<bool, ApiError>;
}
