use std::path::Path;

use crate::input::{InputError, WellCoord, WellLabel, field, for_each_data_row};

/// Column positions (0-based) of the probe-order file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeColumns {
    pub plate: usize,
    pub well: usize,
    pub probe: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecord {
    pub plate_id: String,
    pub well: WellCoord,
    pub probe_name: String,
    pub line: usize,
}

pub fn read_probe_records(
    path: &Path,
    columns: &ProbeColumns,
) -> Result<Vec<ProbeRecord>, InputError> {
    let mut records = Vec::new();
    for_each_data_row(path, |line, fields| {
        let plate_id = field(path, line, fields, columns.plate)?;
        let well_raw = field(path, line, fields, columns.well)?;
        let probe_name = field(path, line, fields, columns.probe)?;
        let well = WellLabel::parse(well_raw).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        records.push(ProbeRecord {
            plate_id: plate_id.to_string(),
            well,
            probe_name: probe_name.to_string(),
            line,
        });
        Ok(())
    })?;

    tracing::debug!(
        records = records.len(),
        "parsed probe-order file {}",
        path.display()
    );
    Ok(records)
}
