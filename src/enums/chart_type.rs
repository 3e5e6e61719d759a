#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
        }
    }

    #[doc = "Parse a chart-type string from a response body. Anything outside the four supported types is rejected by the caller."]
    pub fn parse(value: &str) -> Option<ChartType> {
        match value.trim().to_lowercase().as_str() {
            "bar" => Some(ChartType::Bar),
            "line" => Some(ChartType::Line),
            "pie" => Some(ChartType::Pie),
            "scatter" => Some(ChartType::Scatter),
            _ => None,
        }
    }

    #[doc = r#"
        Keyword-based chart-type detection used when the response carries no usable type.
        Explicit mentions win over data-shape hints; the final fallback is a bar chart.
    "#]
    pub fn detect_from_prompt(prompt: &str) -> ChartType {
        let prompt_lower: String = prompt.to_lowercase();

        let contains_any = |words: &[&str]| words.iter().any(|w| prompt_lower.contains(w));

        if contains_any(&["pie chart", "pie"]) {
            return ChartType::Pie;
        }
        if contains_any(&["line chart", "line graph", "trend", "over time", "time series"]) {
            return ChartType::Line;
        }
        if contains_any(&["scatter plot", "correlation", "relationship", "vs", "versus"]) {
            return ChartType::Scatter;
        }
        if contains_any(&["bar chart", "bar graph", "comparison", "compare"]) {
            return ChartType::Bar;
        }

        /* Data-shape hints when no chart type is named outright */
        if contains_any(&["share", "distribution", "percentage", "proportion"]) {
            ChartType::Pie
        } else if contains_any(&["growth", "change", "monthly", "yearly", "daily"]) {
            ChartType::Line
        } else {
            ChartType::Bar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_four_supported_types() {
        assert_eq!(ChartType::parse("bar"), Some(ChartType::Bar));
        assert_eq!(ChartType::parse(" LINE "), Some(ChartType::Line));
        assert_eq!(ChartType::parse("Pie"), Some(ChartType::Pie));
        assert_eq!(ChartType::parse("scatter"), Some(ChartType::Scatter));
    }

    #[test]
    fn parse_rejects_unknown_types() {
        assert_eq!(ChartType::parse("histogram"), None);
        assert_eq!(ChartType::parse(""), None);
    }

    #[test]
    fn detection_prefers_explicit_mentions() {
        assert_eq!(
            ChartType::detect_from_prompt("show me a pie chart of market share"),
            ChartType::Pie
        );
        assert_eq!(
            ChartType::detect_from_prompt("revenue trend over time"),
            ChartType::Line
        );
        assert_eq!(
            ChartType::detect_from_prompt("correlation between price and demand"),
            ChartType::Scatter
        );
        assert_eq!(
            ChartType::detect_from_prompt("compare sales across regions"),
            ChartType::Bar
        );
    }

    #[test]
    fn detection_falls_back_to_data_shape_hints_then_bar() {
        assert_eq!(
            ChartType::detect_from_prompt("smartphone market distribution"),
            ChartType::Pie
        );
        assert_eq!(
            ChartType::detect_from_prompt("monthly active users"),
            ChartType::Line
        );
        assert_eq!(ChartType::detect_from_prompt("quarterly revenue"), ChartType::Bar);
    }
}
