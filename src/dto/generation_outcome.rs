use crate::common::*;

use crate::model::chart::chart_data::*;

#[doc = r#"
    Result of one generation round-trip: the extracted chart description,
    the free-form analysis text that preceded it (when substantial), and the
    prompt the user originally submitted.
"#]
#[derive(Debug, Clone, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct GenerationOutcome {
    pub chart_data: ChartData,
    pub analysis: Option<String>,
    pub original_prompt: String,
}
