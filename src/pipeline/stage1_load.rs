use std::path::Path;

use crate::config::PlateMapConfig;
use crate::input::InputError;
use crate::input::filter::read_removal_set;
use crate::input::probes::read_probe_records;
use crate::model::grid::PlateGridModel;
use crate::model::locus::RemovalSet;

#[derive(Debug)]
pub struct Stage1Output {
    pub grid: PlateGridModel,
    pub removal_set: RemovalSet,
}

/// Reads both input files and builds the per-plate grids.
pub fn run_stage1(
    probe_file: &Path,
    filter_file: &Path,
    config: &PlateMapConfig,
) -> Result<Stage1Output, InputError> {
    tracing::info!("reading input file: {}", probe_file.display());
    let records = read_probe_records(probe_file, &config.probe_columns())?;
    let grid = PlateGridModel::build(&records);

    for well in grid.out_of_range(config.dimensions()) {
        tracing::warn!(
            "plate {} well {} lies outside the {}x{} plate and will not be drawn",
            well.plate_id,
            well.well,
            config.plate.plate_rows,
            config.plate.plate_columns
        );
    }
    if grid.plate_count() == 0 {
        tracing::warn!("no probe records found in {}", probe_file.display());
    }

    tracing::info!("reading filter file: {}", filter_file.display());
    let removal_set = read_removal_set(filter_file)?;
    if removal_set.is_empty() {
        tracing::warn!(
            "filter file {} lists no loci; every well is kept",
            filter_file.display()
        );
    }

    tracing::debug!(
        records = records.len(),
        plates = grid.plate_count(),
        duplicates = grid.duplicates().len(),
        loci_to_remove = removal_set.len(),
        "inputs loaded"
    );
    Ok(Stage1Output { grid, removal_set })
}
