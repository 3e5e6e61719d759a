pub mod chart_request;
pub mod exported_file;
pub mod generation_outcome;
