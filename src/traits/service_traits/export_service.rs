use crate::common::*;

use crate::dto::{exported_file::*, generation_outcome::*};
use crate::errors::app_errors::*;
use crate::model::chart::figure::*;

#[async_trait]
pub trait ExportService: Send + Sync {
    #[doc = r#"
        Serialize a figure into a standalone HTML document via the configured
        template and write it under the output directory with a generated
        unique filename. A missing template fails before anything is written.
    "#]
    async fn export(
        &self,
        figure: &Figure,
        outcome: &GenerationOutcome,
    ) -> Result<ExportedFile, ExportError>;

    #[doc = "List previously exported HTML files in a stable order."]
    async fn list_output_files(&self) -> Result<Vec<PathBuf>, ExportError>;

    #[doc = "Delete all exported HTML files, returning how many were removed."]
    async fn clean_output_directory(&self) -> Result<usize, ExportError>;
}
