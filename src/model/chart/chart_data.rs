use crate::common::*;

fn default_title() -> String {
    String::from("Generated Chart")
}

fn default_description() -> String {
    String::from("Generated data visualization")
}

fn default_dataset_name() -> String {
    String::from("Values")
}

#[doc = r#"
    Chart description extracted from a remote inference response.
    Untrusted until the chart service validates it: `chart_type` is still a
    free-form string here, and the series shape has not been checked.

    Two series encodings are accepted on the wire: the labeled form
    `data {labels, datasets}` and the pair form `series [[label, value], ..]`.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartData {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub data: Option<SeriesData>,
    #[serde(default)]
    pub series: Option<Vec<(String, f64)>>,
    #[serde(default)]
    pub chart_config: Option<ChartConfigData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct Dataset {
    #[serde(default = "default_dataset_name")]
    pub name: String,
    #[serde(default)]
    pub values: Vec<f64>,
}

#[doc = "Optional presentation hints carried alongside the series data."]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartConfigData {
    #[serde(default)]
    pub x_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub show_legend: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_form_deserializes_with_defaults() {
        let raw: &str = r#"{
            "chart_type": "bar",
            "data": {
                "labels": ["Q1", "Q2"],
                "datasets": [{"name": "Revenue", "values": [100, 150]}]
            }
        }"#;

        let chart: ChartData = serde_json::from_str(raw).unwrap();
        assert_eq!(chart.title(), "Generated Chart");
        assert_eq!(chart.chart_type().as_deref(), Some("bar"));
        assert_eq!(chart.data().as_ref().unwrap().labels().len(), 2);
    }

    #[test]
    fn pair_form_deserializes_from_tuples() {
        let raw: &str = r#"{"chart_type":"bar","series":[["Q1",100],["Q2",150]]}"#;
        let chart: ChartData = serde_json::from_str(raw).unwrap();

        let series: &Vec<(String, f64)> = chart.series().as_ref().unwrap();
        assert_eq!(series[0], (String::from("Q1"), 100.0));
        assert_eq!(series[1], (String::from("Q2"), 150.0));
    }
}
