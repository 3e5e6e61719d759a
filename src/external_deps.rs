pub use chrono::{DateTime, Local, Utc};
pub use flexi_logger::{Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, Naming, Record};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{Client, StatusCode};
