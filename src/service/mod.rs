pub mod chart_service_impl;
pub mod export_service_impl;
pub mod generation_service_impl;
