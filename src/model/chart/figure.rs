use crate::common::*;

#[doc = r#"
    The rendered chart artifact: a Plotly-compatible figure.
    Serializes to `{ "data": [...], "layout": {...} }`, the exact shape
    `Plotly.newPlot` consumes in the exported HTML document.

    Derived deterministically from validated chart data: the same input
    always yields an equivalent figure.
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[doc = "Total number of plotted points across all traces."]
    pub fn data_points(&self) -> usize {
        self.data
            .iter()
            .map(|trace| {
                trace
                    .y
                    .as_ref()
                    .map(|y| y.len())
                    .or_else(|| trace.values.as_ref().map(|v| v.len()))
                    .unwrap_or(0)
            })
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, new)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, new)]
pub struct LineStyle {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisTitle>,
    pub showlegend: bool,
    pub template: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize, new)]
pub struct AxisTitle {
    pub title: String,
}
