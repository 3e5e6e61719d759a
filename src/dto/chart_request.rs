use crate::common::*;

use crate::model::configs::app_config::*;

pub const PROJECT_NAME: &str = "Chart Generator";
pub const PROJECT_CONTEXT: &str = "Generate interactive chart data based on user request";

#[doc = r#"
    The exact wire payload the remote endpoint expects.
    The mixed-casing duplication between the `INJECTION` block and the
    lowercase `injection` block (and the `topk`/`token` key names) is the
    remote API's fixed contract and is preserved verbatim.
"#]
#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ChartRequest {
    #[serde(rename = "PROJECT")]
    pub project: String,
    #[serde(rename = "CONTEXT")]
    pub context: String,
    #[serde(rename = "INJECTION")]
    pub injection: InjectionInput,
    #[serde(rename = "injection")]
    pub sampling: SamplingParams,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct InjectionInput {
    #[serde(rename = "INPUT")]
    pub input: String,
}

#[doc = "Sampling parameters, stringified per the wire contract."]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SamplingParams {
    pub temperature: String,
    pub topk: String,
    pub token: String,
}

impl ChartRequest {
    pub fn new(enhanced_prompt: String, config: &AppConfig) -> Self {
        ChartRequest {
            project: PROJECT_NAME.to_string(),
            context: PROJECT_CONTEXT.to_string(),
            injection: InjectionInput::new(enhanced_prompt),
            sampling: SamplingParams::new(
                config.temperature().to_string(),
                config.top_k().to_string(),
                config.max_tokens().to_string(),
            ),
        }
    }

    #[doc = "Fixed small probe used to verify the endpoint answers at all."]
    pub fn connection_probe() -> Self {
        ChartRequest {
            project: String::from("Test"),
            context: String::from("Connection test"),
            injection: InjectionInput::new(String::from(
                "Hello, please respond with 'API connection successful'",
            )),
            sampling: SamplingParams::new(
                String::from("0.1"),
                String::from("0.1"),
                String::from("50"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn payload_serializes_with_the_exact_wire_keys() {
        let request: ChartRequest =
            ChartRequest::new(String::from("enhanced prompt"), &test_config());
        let payload: Value = serde_json::to_value(&request).unwrap();

        assert_eq!(payload["PROJECT"], "Chart Generator");
        assert_eq!(
            payload["CONTEXT"],
            "Generate interactive chart data based on user request"
        );
        assert_eq!(payload["INJECTION"]["INPUT"], "enhanced prompt");
        assert_eq!(payload["injection"]["temperature"], "0.1");
        assert_eq!(payload["injection"]["topk"], "0.1");
        assert_eq!(payload["injection"]["token"], "2048");
    }

    #[test]
    fn sampling_parameters_are_strings_on_the_wire() {
        let request: ChartRequest = ChartRequest::new(String::from("p"), &test_config());
        let payload: Value = serde_json::to_value(&request).unwrap();

        assert!(payload["injection"]["temperature"].is_string());
        assert!(payload["injection"]["token"].is_string());
    }
}
