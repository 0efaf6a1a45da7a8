use std::path::Path;

use crate::input::{InputError, field, for_each_data_row};
use crate::model::locus::RemovalSet;

/// Reads the first column of the filter file into a removal set.
pub fn read_removal_set(path: &Path) -> Result<RemovalSet, InputError> {
    let mut set = RemovalSet::default();
    for_each_data_row(path, |line, fields| {
        let locus = field(path, line, fields, 0)?;
        if !locus.is_empty() {
            set.insert(locus);
        }
        Ok(())
    })?;
    tracing::debug!(loci = set.len(), "parsed filter file {}", path.display());
    Ok(set)
}
