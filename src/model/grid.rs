use std::collections::BTreeMap;

use crate::input::WellCoord;
use crate::input::probes::ProbeRecord;
use crate::model::geometry::PlateDimensions;

/// Probe names of one plate keyed by well position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlateGrid {
    wells: BTreeMap<WellCoord, String>,
}

impl PlateGrid {
    pub fn get(&self, coord: WellCoord) -> Option<&str> {
        self.wells.get(&coord).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn wells(&self) -> impl Iterator<Item = (WellCoord, &str)> {
        self.wells.iter().map(|(coord, name)| (*coord, name.as_str()))
    }

    fn insert(&mut self, coord: WellCoord, probe_name: String) -> Option<String> {
        self.wells.insert(coord, probe_name)
    }
}

/// A well written more than once; the later record replaced `previous`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateWell {
    pub plate_id: String,
    pub well: WellCoord,
    pub previous: String,
    pub current: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeWell {
    pub plate_id: String,
    pub well: WellCoord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlateGridModel {
    plates: BTreeMap<String, PlateGrid>,
    duplicates: Vec<DuplicateWell>,
}

impl PlateGridModel {
    /// One grid per distinct plate id. Duplicate wells keep the last record
    /// and are reported through `duplicates()`.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProbeRecord>,
    {
        let mut model = Self::default();
        for record in records {
            let grid = model.plates.entry(record.plate_id.clone()).or_default();
            if let Some(previous) = grid.insert(record.well, record.probe_name.clone()) {
                tracing::warn!(
                    "plate {} well {} assigned twice (line {}): {:?} replaced by {:?}",
                    record.plate_id,
                    record.well,
                    record.line,
                    previous,
                    record.probe_name
                );
                model.duplicates.push(DuplicateWell {
                    plate_id: record.plate_id.clone(),
                    well: record.well,
                    previous,
                    current: record.probe_name.clone(),
                    line: record.line,
                });
            }
        }
        model
    }

    #[cfg(test)]
    pub fn plate(&self, plate_id: &str) -> Option<&PlateGrid> {
        self.plates.get(plate_id)
    }

    /// Plates in ascending plate-id order.
    pub fn plates(&self) -> impl Iterator<Item = (&str, &PlateGrid)> {
        self.plates.iter().map(|(id, grid)| (id.as_str(), grid))
    }

    pub fn plate_count(&self) -> usize {
        self.plates.len()
    }

    pub fn duplicates(&self) -> &[DuplicateWell] {
        &self.duplicates
    }

    /// Wells stored in the model that fall outside `dims` and will not be drawn.
    pub fn out_of_range(&self, dims: PlateDimensions) -> Vec<OutOfRangeWell> {
        let mut out = Vec::new();
        for (plate_id, grid) in self.plates() {
            for (well, _) in grid.wells() {
                if !dims.contains(well) {
                    out.push(OutOfRangeWell {
                        plate_id: plate_id.to_string(),
                        well,
                    });
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/grid.rs"]
mod tests;
