use crate::common::*;

#[doc = "Error raised while loading the application configuration from the environment. Fatal at startup."]
#[derive(Debug, Error, new)]
#[error("[ConfigError] '{field}': {reason}")]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: String,
}

#[doc = "Errors surfaced by a single call against the remote inference endpoint. Recoverable per request; the caller decides whether to retry."]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("remote endpoint returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("remote endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

#[doc = "Errors raised while validating chart-description data against the supported chart schema."]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported chart type: '{0}'")]
    UnsupportedChartType(String),

    #[error("malformed series data: {0}")]
    MalformedSeries(String),
}

#[doc = "Errors raised while persisting a figure as a standalone HTML file. Export failures never invalidate the already-built figure."]
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("chart template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("export io failure: {0}")]
    WriteFailed(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_io_message_fits_reads_and_writes() {
        /* The same variant covers template reads and artifact writes */
        let err: ExportError =
            ExportError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        let message: String = err.to_string();
        assert!(message.starts_with("export io failure"));
        assert!(!message.contains("write"));
    }
}
