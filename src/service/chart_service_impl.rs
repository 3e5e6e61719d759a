use crate::common::*;

use crate::enums::chart_type::*;
use crate::enums::color_scheme::*;
use crate::errors::app_errors::*;
use crate::model::chart::chart_data::*;
use crate::model::chart::figure::*;
use crate::traits::service_traits::chart_service::*;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = r#"
        Resolve the series into the labeled form. The pair encoding
        `[["Q1", 100], ..]` is normalized into a single dataset; absence of
        both encodings fails the build.
    "#]
    fn resolve_series(&self, chart_data: &ChartData) -> Result<SeriesData, SchemaError> {
        if let Some(series) = chart_data.series() {
            let labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();
            let values: Vec<f64> = series.iter().map(|(_, value)| *value).collect();
            return Ok(SeriesData::new(
                labels,
                vec![Dataset::new(String::from("Values"), values)],
            ));
        }

        if let Some(data) = chart_data.data() {
            return Ok(data.clone());
        }

        Err(SchemaError::MalformedSeries(String::from(
            "chart data carries neither 'data' nor 'series'",
        )))
    }

    fn validate_shape(
        &self,
        chart_type: ChartType,
        series: &SeriesData,
    ) -> Result<(), SchemaError> {
        if series.datasets().is_empty() {
            return Err(SchemaError::MalformedSeries(String::from(
                "at least one dataset is required",
            )));
        }

        match chart_type {
            ChartType::Bar | ChartType::Line | ChartType::Pie => {
                let label_count: usize = series.labels().len();
                for dataset in series.datasets() {
                    if dataset.values().len() != label_count {
                        return Err(SchemaError::MalformedSeries(format!(
                            "dataset '{}' has {} values for {} labels",
                            dataset.name(),
                            dataset.values().len(),
                            label_count
                        )));
                    }
                }
            }
            ChartType::Scatter => {
                /* Paired x/y datasets must be the same length; the index-based
                fallback for one dataset has no cross-dataset constraint */
                if series.datasets().len() >= 2 {
                    let x_len: usize = series.datasets()[0].values().len();
                    let y_len: usize = series.datasets()[1].values().len();
                    if x_len != y_len {
                        return Err(SchemaError::MalformedSeries(format!(
                            "x dataset has {} values but y dataset has {}",
                            x_len, y_len
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn color_scheme_of(&self, chart_data: &ChartData) -> ColorScheme {
        chart_data
            .chart_config()
            .as_ref()
            .and_then(|c| c.color_scheme().as_deref())
            .map(ColorScheme::parse_or_default)
            .unwrap_or(ColorScheme::Plotly)
    }

    fn axis_titles(
        &self,
        chart_data: &ChartData,
        default_x: &str,
        default_y: &str,
    ) -> (AxisTitle, AxisTitle) {
        let config: Option<&ChartConfigData> = chart_data.chart_config().as_ref();
        let x_title: String = config
            .and_then(|c| c.x_axis_title().clone())
            .unwrap_or_else(|| default_x.to_string());
        let y_title: String = config
            .and_then(|c| c.y_axis_title().clone())
            .unwrap_or_else(|| default_y.to_string());
        (AxisTitle::new(x_title), AxisTitle::new(y_title))
    }

    fn show_legend_or(&self, chart_data: &ChartData, default: bool) -> bool {
        chart_data
            .chart_config()
            .as_ref()
            .and_then(|c| *c.show_legend())
            .unwrap_or(default)
    }

    fn build_bar(&self, chart_data: &ChartData, series: &SeriesData) -> Figure {
        let colors: Vec<String> = self
            .color_scheme_of(chart_data)
            .color_cycle(series.datasets().len());
        let x: Vec<Value> = series.labels().iter().map(|l| json!(l)).collect();

        let data: Vec<Trace> = series
            .datasets()
            .iter()
            .enumerate()
            .map(|(i, dataset)| Trace {
                trace_type: "bar",
                name: Some(dataset.name().clone()),
                x: Some(x.clone()),
                y: Some(dataset.values().clone()),
                marker: Some(Marker::new(Some(colors[i].clone()), None, None, None)),
                ..Trace::default()
            })
            .collect();

        let (xaxis, yaxis): (AxisTitle, AxisTitle) =
            self.axis_titles(chart_data, "Categories", "Values");

        Figure {
            data,
            layout: Layout {
                title: chart_data.title().clone(),
                xaxis: Some(xaxis),
                yaxis: Some(yaxis),
                showlegend: self.show_legend_or(chart_data, series.datasets().len() > 1),
                template: "plotly_white",
                hovermode: Some("x unified"),
            },
        }
    }

    fn build_line(&self, chart_data: &ChartData, series: &SeriesData) -> Figure {
        let colors: Vec<String> = self
            .color_scheme_of(chart_data)
            .color_cycle(series.datasets().len());
        let x: Vec<Value> = series.labels().iter().map(|l| json!(l)).collect();

        let data: Vec<Trace> = series
            .datasets()
            .iter()
            .enumerate()
            .map(|(i, dataset)| Trace {
                trace_type: "scatter",
                name: Some(dataset.name().clone()),
                x: Some(x.clone()),
                y: Some(dataset.values().clone()),
                mode: Some("lines+markers"),
                line: Some(LineStyle::new(colors[i].clone(), 3)),
                marker: Some(Marker::new(None, None, Some(8), None)),
                ..Trace::default()
            })
            .collect();

        let (xaxis, yaxis): (AxisTitle, AxisTitle) =
            self.axis_titles(chart_data, "X-axis", "Y-axis");

        Figure {
            data,
            layout: Layout {
                title: chart_data.title().clone(),
                xaxis: Some(xaxis),
                yaxis: Some(yaxis),
                showlegend: self.show_legend_or(chart_data, series.datasets().len() > 1),
                template: "plotly_white",
                hovermode: Some("x unified"),
            },
        }
    }

    fn build_pie(&self, chart_data: &ChartData, series: &SeriesData) -> Figure {
        /* Pie charts plot the first dataset only */
        let dataset: &Dataset = &series.datasets()[0];
        let colors: Vec<String> = self
            .color_scheme_of(chart_data)
            .color_cycle(series.labels().len());

        let trace: Trace = Trace {
            trace_type: "pie",
            labels: Some(series.labels().clone()),
            values: Some(dataset.values().clone()),
            hole: Some(0.3),
            marker: Some(Marker::new(None, Some(colors), None, None)),
            ..Trace::default()
        };

        Figure {
            data: vec![trace],
            layout: Layout {
                title: chart_data.title().clone(),
                xaxis: None,
                yaxis: None,
                showlegend: self.show_legend_or(chart_data, true),
                template: "plotly_white",
                hovermode: None,
            },
        }
    }

    fn build_scatter(&self, chart_data: &ChartData, series: &SeriesData) -> Figure {
        let colors: Vec<String> = self
            .color_scheme_of(chart_data)
            .color_cycle(series.datasets().len());
        let marker: Marker = Marker::new(Some(colors[0].clone()), None, Some(12), Some(0.7));

        let trace: Trace = if series.datasets().len() >= 2 {
            /* Two datasets are treated as paired x/y coordinates */
            let x: Vec<Value> = series.datasets()[0]
                .values()
                .iter()
                .map(|v| json!(v))
                .collect();
            Trace {
                trace_type: "scatter",
                x: Some(x),
                y: Some(series.datasets()[1].values().clone()),
                mode: Some("markers"),
                marker: Some(marker),
                text: Some(series.labels().clone()),
                hovertemplate: Some("<b>%{text}</b><br>X: %{x}<br>Y: %{y}<extra></extra>"),
                ..Trace::default()
            }
        } else {
            let dataset: &Dataset = &series.datasets()[0];
            let x: Vec<Value> = (0..dataset.values().len()).map(|i| json!(i)).collect();
            Trace {
                trace_type: "scatter",
                x: Some(x),
                y: Some(dataset.values().clone()),
                mode: Some("markers"),
                marker: Some(marker),
                text: Some(series.labels().clone()),
                hovertemplate: Some("<b>%{text}</b><br>Index: %{x}<br>Value: %{y}<extra></extra>"),
                ..Trace::default()
            }
        };

        let (xaxis, yaxis): (AxisTitle, AxisTitle) =
            self.axis_titles(chart_data, "X Values", "Y Values");

        Figure {
            data: vec![trace],
            layout: Layout {
                title: chart_data.title().clone(),
                xaxis: Some(xaxis),
                yaxis: Some(yaxis),
                showlegend: false,
                template: "plotly_white",
                hovermode: None,
            },
        }
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn build_figure(&self, chart_data: &ChartData) -> Result<Figure, SchemaError> {
        let raw_type: &str = chart_data.chart_type().as_deref().unwrap_or("").trim();

        let chart_type: ChartType = ChartType::parse(raw_type)
            .ok_or_else(|| SchemaError::UnsupportedChartType(raw_type.to_string()))?;

        let series: SeriesData = self.resolve_series(chart_data)?;
        self.validate_shape(chart_type, &series)?;

        let figure: Figure = match chart_type {
            ChartType::Bar => self.build_bar(chart_data, &series),
            ChartType::Line => self.build_line(chart_data, &series),
            ChartType::Pie => self.build_pie(chart_data, &series),
            ChartType::Scatter => self.build_scatter(chart_data, &series),
        };

        Ok(figure)
    }
}
