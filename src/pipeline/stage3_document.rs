use std::path::Path;

use crate::assemble::{Document, PdfSettings, assemble_document, write_document};
use crate::pipeline::PipelineError;
use crate::render::PlatePage;

pub fn run_stage3(
    pages: Vec<PlatePage>,
    settings: &PdfSettings,
    out_path: &Path,
) -> Result<Document, PipelineError> {
    tracing::info!("creating final pdf");
    let document = assemble_document(pages, settings)?;
    write_document(&document, out_path).map_err(|source| PipelineError::Output {
        path: out_path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        pages = document.page_count(),
        "wrote {}",
        out_path.display()
    );
    Ok(document)
}
