use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref};
use svg2pdf::usvg;
use thiserror::Error;

use crate::render::PlatePage;

const PAGE_XOBJECT: Name<'static> = Name(b"Plate");
const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("plate {plate}: failed to parse page SVG: {message}")]
    Svg { plate: String, message: String },
    #[error("plate {plate}: failed to convert page to PDF: {message}")]
    Pdf { plate: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfSettings {
    /// Pixels per inch used to size each page.
    pub dpi: u32,
    pub system_fonts: bool,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            dpi: 500,
            system_fonts: true,
        }
    }
}

impl PdfSettings {
    pub fn page_size_pt(&self, width_px: u32, height_px: u32) -> (f32, f32) {
        let scale = POINTS_PER_INCH / self.dpi.max(1) as f32;
        (width_px as f32 * scale, height_px as f32 * scale)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Plate ids in page order.
    pub plate_order: Vec<String>,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.plate_order.len()
    }
}

/// Merges plate pages into one PDF, one page per plate, ordered by plate id.
/// Pages are consumed; each one is dropped as soon as it has been merged.
pub fn assemble_document(
    mut pages: Vec<PlatePage>,
    settings: &PdfSettings,
) -> Result<Document, RenderError> {
    pages.sort_by(|a, b| a.plate_id.cmp(&b.plate_id));

    let mut options = usvg::Options::default();
    if settings.system_fonts {
        options.fontdb_mut().load_system_fonts();
    }
    options.font_family = "Liberation Mono".to_string();

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();

    let mut pdf = Pdf::new();
    let mut page_ids = Vec::with_capacity(pages.len());
    let mut plate_order = Vec::with_capacity(pages.len());

    for page in pages {
        let tree = usvg::Tree::from_str(&page.svg, &options).map_err(|e| RenderError::Svg {
            plate: page.plate_id.clone(),
            message: e.to_string(),
        })?;
        let (chunk, svg_id) = svg2pdf::to_chunk(&tree, svg2pdf::ConversionOptions::default())
            .map_err(|e| RenderError::Pdf {
                plate: page.plate_id.clone(),
                message: e.to_string(),
            })?;

        // Chunk refs start at 1 again for every page; move them past ours.
        let mut renumbered = HashMap::new();
        let chunk = chunk.renumber(|old| *renumbered.entry(old).or_insert_with(|| alloc.bump()));
        let svg_id = renumbered
            .get(&svg_id)
            .copied()
            .ok_or_else(|| RenderError::Pdf {
                plate: page.plate_id.clone(),
                message: "converted page has no form object".to_string(),
            })?;

        let page_id = alloc.bump();
        let content_id = alloc.bump();
        let (width_pt, height_pt) = settings.page_size_pt(page.width, page.height);

        let mut pdf_page = pdf.page(page_id);
        pdf_page.media_box(Rect::new(0.0, 0.0, width_pt, height_pt));
        pdf_page.parent(page_tree_id);
        pdf_page.contents(content_id);
        let mut resources = pdf_page.resources();
        resources.x_objects().pair(PAGE_XOBJECT, svg_id);
        resources.finish();
        pdf_page.finish();

        // The form object is normalized to the unit square.
        let mut content = Content::new();
        content.save_state();
        content.transform([width_pt, 0.0, 0.0, height_pt, 0.0, 0.0]);
        content.x_object(PAGE_XOBJECT);
        content.restore_state();
        pdf.stream(content_id, &content.finish());
        pdf.extend(&chunk);

        tracing::debug!(plate = %page.plate_id, "merged plate page");
        page_ids.push(page_id);
        plate_order.push(page.plate_id);
    }

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    Ok(Document {
        plate_order,
        bytes: pdf.finish(),
    })
}

pub fn write_document(document: &Document, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &document.bytes)
}

#[cfg(test)]
#[path = "../tests/src_inline/assemble.rs"]
mod tests;
