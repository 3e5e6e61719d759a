use crate::common::*;

use crate::errors::app_errors::*;
use crate::model::chart::{chart_data::*, figure::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = r#"
        Validate chart-description data and build the interactive figure.
        The chart type must be one of the four supported kinds and the series
        shape must match what that kind requires. An empty series is accepted
        and yields an empty-but-valid figure.
    "#]
    async fn build_figure(&self, chart_data: &ChartData) -> Result<Figure, SchemaError>;
}
