use crate::common::*;

use crate::dto::chart_request::*;
use crate::dto::generation_outcome::*;
use crate::enums::chart_type::*;
use crate::errors::app_errors::*;
use crate::model::chart::chart_data::*;
use crate::model::configs::app_config::*;
use crate::traits::repository_traits::inference_repository::*;
use crate::traits::service_traits::generation_service::*;
use crate::utils_modules::text_utils::*;

#[derive(Debug, new)]
pub struct GenerationServiceImpl<R: InferenceRepository> {
    inference_repository: R,
    config: AppConfig,
}

impl<R: InferenceRepository> GenerationServiceImpl<R> {
    #[doc = r#"
        Wrap the user's request in the instruction template the remote model
        was tuned for: chart-type selection rules plus the expected JSON shape.
    "#]
    fn build_enhanced_prompt(&self, user_prompt: &str, chart_type_hint: Option<ChartType>) -> String {
        let chart_instruction: String = match chart_type_hint {
            Some(chart_type) => format!("The chart type should be: {}", chart_type.as_str()),
            None => String::new(),
        };

        format!(
            r#"
You are a data visualization assistant. Based on the user's request, generate realistic data and provide chart configuration.

User Request: {user_prompt}
{chart_instruction}

CHART TYPE SELECTION RULES:
- If user mentions "pie chart" or "pie" -> use "pie"
- If user mentions "line chart", "line graph", "trend", "over time" -> use "line"
- If user mentions "bar chart", "bar graph", "comparison" -> use "bar"
- If user mentions "scatter plot", "correlation", "relationship" -> use "scatter"
- If unclear, choose the most appropriate type for the data

Please provide your response in the following JSON format:
{{
    "title": "Chart title",
    "description": "Brief description of the data",
    "chart_type": "bar|line|pie|scatter",
    "data": {{
        "labels": ["label1", "label2", "label3"],
        "datasets": [{{
            "name": "Dataset Name",
            "values": [10, 20, 30]
        }}]
    }},
    "chart_config": {{
        "x_axis_title": "X-axis label",
        "y_axis_title": "Y-axis label",
        "color_scheme": "viridis|plotly|blues",
        "show_legend": true
    }}
}}

CRITICAL: The chart_type field must EXACTLY match what the user requested. If they said "pie chart", use "pie". If they said "line chart", use "line".

Important guidelines:
1. Generate realistic, relevant data (5-20 data points)
2. ALWAYS set chart_type correctly based on user request
3. Provide meaningful labels and titles
4. Ensure data makes sense for the requested topic
5. Use proper JSON formatting

Response:
"#
        )
    }

    #[doc = r#"
        Pull the generated text out of the response envelope.
        Endpoints differ: some wrap the text in a `prediction` field, some
        return the chart object directly, some return a bare string.
    "#]
    fn extract_prediction_content(&self, response: &Value) -> Option<String> {
        match response {
            Value::Object(map) => {
                if let Some(prediction) = map.get("prediction") {
                    return match prediction {
                        Value::String(s) => Some(s.clone()),
                        other => Some(other.to_string()),
                    };
                }

                if map.contains_key("title") && map.contains_key("chart_type") {
                    return Some(response.to_string());
                }

                Some(response.to_string())
            }
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    #[doc = r#"
        Find the chart object inside free-form prediction text.
        The model often surrounds the JSON with analysis prose and markdown
        fences, so every balanced-brace candidate is tried in order until one
        parses and looks like chart data.
    "#]
    fn extract_chart_data(&self, cleaned: &str) -> Option<(usize, ChartData)> {
        for (offset, candidate) in balanced_json_candidates(cleaned) {
            let Ok(value) = serde_json::from_str::<Value>(candidate) else {
                continue;
            };

            let has_series: bool =
                value.get("data").is_some() || value.get("series").is_some();
            let has_identity: bool =
                value.get("chart_type").is_some() || value.get("title").is_some();

            if has_series && has_identity {
                if let Ok(chart_data) = serde_json::from_value::<ChartData>(value) {
                    return Some((offset, chart_data));
                }
            }
        }

        None
    }
}

#[async_trait]
impl<R: InferenceRepository> GenerationService for GenerationServiceImpl<R> {
    async fn generate_chart_data(
        &self,
        user_prompt: &str,
        chart_type_hint: Option<ChartType>,
    ) -> Result<GenerationOutcome, ApiError> {
        let enhanced_prompt: String = self.build_enhanced_prompt(user_prompt, chart_type_hint);
        let payload: ChartRequest = ChartRequest::new(enhanced_prompt, &self.config);

        info!(
            "[GenerationServiceImpl->generate_chart_data] requesting chart data for prompt: {}",
            user_prompt
        );

        let response: Value = self.inference_repository.generate(&payload).await?;

        let prediction: String = self.extract_prediction_content(&response).ok_or_else(|| {
            ApiError::MalformedResponse(String::from(
                "[GenerationServiceImpl->generate_chart_data] no prediction content in response",
            ))
        })?;

        if *self.config.debug() {
            info!(
                "[GenerationServiceImpl->generate_chart_data] prediction content ({} chars)",
                prediction.len()
            );
        }

        let cleaned: String = clean_prediction_text(&prediction);

        let (json_start, mut chart_data): (usize, ChartData) =
            self.extract_chart_data(&cleaned).ok_or_else(|| {
                ApiError::MalformedResponse(String::from(
                    "[GenerationServiceImpl->generate_chart_data] no chart JSON found in prediction",
                ))
            })?;

        /* A missing or blank chart_type falls back to the hint, then to prompt keywords */
        let needs_type: bool = chart_data
            .chart_type
            .as_deref()
            .map(|t| t.trim().is_empty())
            .unwrap_or(true);
        if needs_type {
            let resolved: ChartType = chart_type_hint
                .unwrap_or_else(|| ChartType::detect_from_prompt(user_prompt));
            chart_data.chart_type = Some(resolved.as_str().to_string());
        }

        let analysis: Option<String> = extract_analysis_text(&cleaned, json_start);

        Ok(GenerationOutcome::new(
            chart_data,
            analysis,
            user_prompt.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubRepository {
        response: Value,
    }

    #[async_trait]
    impl InferenceRepository for StubRepository {
        async fn generate(&self, _payload: &ChartRequest) -> Result<Value, ApiError> {
            Ok(self.response.clone())
        }

        async fn test_connection(&self) -> Result<bool, ApiError> {
            Ok(true)
        }
    }

    fn test_config() -> AppConfig {
        AppConfig::new(
            String::from("http://localhost:9100/v1"),
            0.1,
            0.1,
            2048,
            PathBuf::from("outputs"),
            PathBuf::from("templates"),
            false,
            false,
        )
    }

    fn service_for(response: Value) -> GenerationServiceImpl<StubRepository> {
        GenerationServiceImpl::new(StubRepository { response }, test_config())
    }

    #[tokio::test]
    async fn prediction_field_with_embedded_json_is_extracted() {
        let prediction: &str = concat!(
            "Quarterly revenue shows steady growth across the year.\n",
            "```json\n",
            r#"{"title":"Quarterly Revenue","chart_type":"bar","data":{"labels":["Q1","Q2"],"datasets":[{"name":"Revenue","values":[100,150]}]}}"#,
            "\n```"
        );
        let service = service_for(json!({ "prediction": prediction }));

        let outcome: GenerationOutcome = service
            .generate_chart_data("quarterly revenue bar chart", None)
            .await
            .unwrap();

        assert_eq!(outcome.chart_data().title(), "Quarterly Revenue");
        assert_eq!(outcome.chart_data().chart_type().as_deref(), Some("bar"));
        assert_eq!(
            outcome.analysis().as_deref(),
            Some("Quarterly revenue shows steady growth across the year.")
        );
        assert_eq!(outcome.original_prompt(), "quarterly revenue bar chart");
    }

    #[tokio::test]
    async fn direct_chart_object_response_is_accepted() {
        let service = service_for(json!({
            "title": "Market Share",
            "chart_type": "pie",
            "data": {
                "labels": ["A", "B"],
                "datasets": [{"name": "Share", "values": [60, 40]}]
            }
        }));

        let outcome: GenerationOutcome = service
            .generate_chart_data("market share pie chart", None)
            .await
            .unwrap();
        assert_eq!(outcome.chart_data().chart_type().as_deref(), Some("pie"));
    }

    #[tokio::test]
    async fn minimal_pair_series_response_is_accepted() {
        let service = service_for(json!({
            "chart_type": "bar",
            "series": [["Q1", 100], ["Q2", 150]]
        }));

        let outcome: GenerationOutcome = service
            .generate_chart_data("show quarterly revenue as a bar chart", None)
            .await
            .unwrap();

        assert_eq!(outcome.chart_data().chart_type().as_deref(), Some("bar"));
        let series: &Vec<(String, f64)> = outcome.chart_data().series().as_ref().unwrap();
        assert_eq!(series[0], (String::from("Q1"), 100.0));
        assert_eq!(series[1], (String::from("Q2"), 150.0));
    }

    #[tokio::test]
    async fn missing_chart_type_falls_back_to_the_hint() {
        let prediction: &str =
            r#"{"title":"Trend","data":{"labels":["Jan","Feb"],"datasets":[{"name":"Users","values":[5,9]}]}}"#;
        let service = service_for(json!({ "prediction": prediction }));

        let outcome: GenerationOutcome = service
            .generate_chart_data("user counts", Some(ChartType::Line))
            .await
            .unwrap();
        assert_eq!(outcome.chart_data().chart_type().as_deref(), Some("line"));
    }

    #[tokio::test]
    async fn missing_chart_type_without_hint_uses_prompt_keywords() {
        let prediction: &str =
            r#"{"title":"Share","data":{"labels":["A","B"],"datasets":[{"name":"S","values":[1,2]}]}}"#;
        let service = service_for(json!({ "prediction": prediction }));

        let outcome: GenerationOutcome = service
            .generate_chart_data("smartphone market distribution", None)
            .await
            .unwrap();
        assert_eq!(outcome.chart_data().chart_type().as_deref(), Some("pie"));
    }

    #[tokio::test]
    async fn prediction_without_chart_json_is_a_malformed_response() {
        let service = service_for(json!({ "prediction": "I cannot generate that." }));

        let err: ApiError = service
            .generate_chart_data("anything", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn escaped_prediction_text_is_cleaned_before_extraction() {
        let prediction: String = String::from(
            "\"\"\"Analysis of the data follows below.\\n{\\\"title\\\":\\\"T\\\",\\\"chart_type\\\":\\\"bar\\\",\\\"data\\\":{\\\"labels\\\":[\\\"X\\\"],\\\"datasets\\\":[{\\\"name\\\":\\\"V\\\",\\\"values\\\":[1]}]}}\"",
        );
        let service = service_for(json!({ "prediction": prediction }));

        let outcome: GenerationOutcome =
            service.generate_chart_data("bar chart", None).await.unwrap();
        assert_eq!(outcome.chart_data().title(), "T");
        assert_eq!(
            outcome.analysis().as_deref(),
            Some("Analysis of the data follows below.")
        );
    }
}
