use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::assemble::{PdfSettings, RenderError};
use crate::config::{ConfigError, PlateMapConfig};
use crate::input::{InputError, ParseError};
use crate::render::{ColorMode, RenderContext};

pub mod stage1_load;
pub mod stage2_render;
pub mod stage3_document;

use stage1_load::run_stage1;
use stage2_render::run_stage2;
use stage3_document::run_stage3;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub probe_file: PathBuf,
    pub filter_file: PathBuf,
    pub out_dir: PathBuf,
    pub config: PlateMapConfig,
    pub color_mode: ColorMode,
    pub system_fonts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub plate_order: Vec<String>,
    pub removed_loci: Vec<(String, usize)>,
}

/// File name of the probe file without its extension, looking through `.gz`.
pub fn probe_file_stem(probe_file: &Path) -> String {
    let mut path = probe_file.to_path_buf();
    if path.extension().is_some_and(|ext| ext == "gz") {
        path.set_extension("");
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plates".to_string())
}

/// `<out_dir>/<probe file stem>.pdf`
pub fn document_path(out_dir: &Path, probe_file: &Path) -> PathBuf {
    out_dir.join(format!("{}.pdf", probe_file_stem(probe_file)))
}

pub fn run(options: &RunOptions) -> Result<RunSummary, PipelineError> {
    let config = &options.config;
    config.validate()?;

    fs::create_dir_all(&options.out_dir).map_err(|source| PipelineError::OutputDir {
        path: options.out_dir.clone(),
        source,
    })?;

    let stage1 = run_stage1(&options.probe_file, &options.filter_file, config)?;

    let ctx = RenderContext {
        geometry: config.geometry(),
        colors: options.color_mode,
        removal_set: &stage1.removal_set,
        locus_unit: config.input_file.locus_unit,
        unmarked_probe: config.input_file.unmarked_probe,
    };
    let pages = run_stage2(&stage1.grid, &ctx)?;
    let removed_loci = pages
        .iter()
        .map(|p| (p.plate_id.clone(), p.removed_loci))
        .collect();

    let settings = PdfSettings {
        dpi: config.plate_resolution.dpi,
        system_fonts: options.system_fonts,
    };
    let output_path = document_path(&options.out_dir, &options.probe_file);
    let document = run_stage3(pages, &settings, &output_path)?;

    Ok(RunSummary {
        output_path,
        plate_order: document.plate_order,
        removed_loci,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
