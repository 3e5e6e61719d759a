pub mod chart_type;
pub mod color_scheme;
