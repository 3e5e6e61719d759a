pub mod chart_service;
pub mod export_service;
pub mod generation_service;
