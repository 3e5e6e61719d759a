use crate::common::*;

use crate::dto::generation_outcome::*;
use crate::enums::chart_type::*;
use crate::errors::app_errors::*;

#[async_trait]
pub trait GenerationService: Send + Sync {
    #[doc = r#"
        Turn a user's natural-language request into chart-description data:
        build the enhanced prompt, call the inference endpoint, and extract
        the chart JSON (plus any analysis prose) from the prediction content.

        # Arguments
        * `user_prompt`     - The request as the user typed it
        * `chart_type_hint` - Explicit chart type chosen by the user, if any
    "#]
    async fn generate_chart_data(
        &self,
        user_prompt: &str,
        chart_type_hint: Option<ChartType>,
    ) -> Result<GenerationOutcome, ApiError>;
}
