use crate::common::*;

use crate::dto::exported_file::*;
use crate::dto::generation_outcome::*;
use crate::errors::app_errors::*;
use crate::model::chart::figure::*;
use crate::model::configs::app_config::*;
use crate::traits::service_traits::export_service::*;
use crate::utils_modules::io_utils::*;
use crate::utils_modules::time_utils::*;

pub const TEMPLATE_FILE_NAME: &str = "chart_template.html";

/* Timestamps are millisecond-resolution; the sequence suffix keeps filenames
unique when two exports land in the same millisecond. */
static EXPORT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, new)]
pub struct ExportServiceImpl {
    config: AppConfig,
}

impl ExportServiceImpl {
    fn plotly_embed_config(&self, title: &str) -> Value {
        json!({
            "displayModeBar": true,
            "displaylogo": false,
            "modeBarButtonsToRemove": ["pan2d", "lasso2d", "select2d"],
            "toImageButtonOptions": {
                "format": "png",
                "filename": title.to_lowercase().replace(' ', "_"),
                "height": 600,
                "width": 800,
                "scale": 2
            },
            "responsive": true
        })
    }

    fn render_document(
        &self,
        template: &str,
        figure: &Figure,
        outcome: &GenerationOutcome,
    ) -> Result<String, ExportError> {
        let chart_json: String = figure
            .to_json()
            .map_err(|e| ExportError::WriteFailed(std::io::Error::other(e)))?;

        let title: &str = outcome.chart_data().title();
        let chart_type: &str = outcome
            .chart_data()
            .chart_type()
            .as_deref()
            .unwrap_or("unknown");

        let html: String = template
            .replace("{title}", title)
            .replace("{description}", outcome.chart_data().description())
            .replace("{chart_type}", chart_type)
            .replace("{chart_json}", &chart_json)
            .replace(
                "{plotly_config}",
                &self.plotly_embed_config(title).to_string(),
            )
            .replace("{data_points}", &figure.data_points().to_string())
            .replace("{generation_time}", &display_timestamp())
            .replace("{original_prompt}", outcome.original_prompt());

        Ok(html)
    }
}

#[async_trait]
impl ExportService for ExportServiceImpl {
    #[doc = r#"
        Render the figure into the HTML template and write it under the
        configured output directory. The template is resolved before anything
        touches the filesystem, so a missing template leaves no partial file.
    "#]
    async fn export(
        &self,
        figure: &Figure,
        outcome: &GenerationOutcome,
    ) -> Result<ExportedFile, ExportError> {
        let template_path: PathBuf = self.config.template_dir().join(TEMPLATE_FILE_NAME);
        if !template_path.is_file() {
            return Err(ExportError::TemplateNotFound(template_path));
        }

        let template: String = tokio::fs::read_to_string(&template_path).await?;
        let html: String = self.render_document(&template, figure, outcome)?;

        tokio::fs::create_dir_all(self.config.output_dir()).await?;

        let sequence: u64 = EXPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let file_name: String = format!(
            "{}_{}_{}.html",
            sanitize_filename(outcome.chart_data().title()),
            file_timestamp(),
            sequence
        );
        let path: PathBuf = self.config.output_dir().join(&file_name);

        tokio::fs::write(&path, &html).await?;

        info!("[ExportServiceImpl->export] wrote {}", path.display());

        Ok(ExportedFile::new(file_name, path, html.len() as u64))
    }

    async fn list_output_files(&self) -> Result<Vec<PathBuf>, ExportError> {
        let mut files: Vec<PathBuf> = Vec::new();

        if !self.config.output_dir().is_dir() {
            return Ok(files);
        }

        let mut entries: tokio::fs::ReadDir =
            tokio::fs::read_dir(self.config.output_dir()).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path: PathBuf = entry.path();
            if path.extension().map(|ext| ext == "html").unwrap_or(false) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    async fn clean_output_directory(&self) -> Result<usize, ExportError> {
        let files: Vec<PathBuf> = self.list_output_files().await?;
        let removed: usize = files.len();

        for file in files {
            tokio::fs::remove_file(&file).await?;
        }

        Ok(removed)
    }
}
