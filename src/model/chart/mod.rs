pub mod chart_data;
pub mod figure;
