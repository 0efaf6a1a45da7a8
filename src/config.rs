use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::assemble::PdfSettings;
use crate::input::probes::ProbeColumns;
use crate::model::geometry::{CanvasGeometry, PlateDimensions};
use crate::model::locus::UnmarkedProbePolicy;

pub const DEFAULT_CONFIG_PATH: &str = "kira-platemap.json";
const MAX_PLATE_ROWS: usize = 26;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlateSection {
    pub plate_rows: usize,
    pub plate_columns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFileSection {
    pub locus_unit: usize,
    pub well_col_no: usize,
    pub probe_col_no: usize,
    pub plate_col_no: usize,
    #[serde(default)]
    pub unmarked_probe: UnmarkedProbePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolutionSection {
    pub row_pixels: u32,
    pub column_pixels: u32,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_dpi() -> u32 {
    PdfSettings::default().dpi
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlateMapConfig {
    pub plate: PlateSection,
    pub input_file: InputFileSection,
    pub plate_resolution: ResolutionSection,
}

impl PlateMapConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PlateMapConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rows = self.plate.plate_rows;
        if rows == 0 || rows > MAX_PLATE_ROWS {
            return Err(ConfigError::Invalid(format!(
                "plate_rows must be between 1 and {MAX_PLATE_ROWS}, got {rows}"
            )));
        }
        if self.plate.plate_columns == 0 {
            return Err(ConfigError::Invalid(
                "plate_columns must be at least 1".to_string(),
            ));
        }
        if self.input_file.locus_unit == 0 {
            return Err(ConfigError::Invalid(
                "locus_unit must be at least 1".to_string(),
            ));
        }
        let res = &self.plate_resolution;
        if res.row_pixels == 0 || res.column_pixels == 0 || res.dpi == 0 {
            return Err(ConfigError::Invalid(
                "row_pixels, column_pixels and dpi must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> PlateDimensions {
        PlateDimensions::new(self.plate.plate_rows, self.plate.plate_columns)
    }

    pub fn geometry(&self) -> CanvasGeometry {
        CanvasGeometry::new(
            self.dimensions(),
            self.plate_resolution.row_pixels,
            self.plate_resolution.column_pixels,
        )
    }

    pub fn probe_columns(&self) -> ProbeColumns {
        ProbeColumns {
            plate: self.input_file.plate_col_no,
            well: self.input_file.well_col_no,
            probe: self.input_file.probe_col_no,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
