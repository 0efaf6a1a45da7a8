use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod filter;
pub mod probes;
pub mod well;

pub use well::{ParseError, WellCoord, WellLabel};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: line {line} has no column {column}")]
    MissingColumn {
        path: PathBuf,
        line: usize,
        column: usize,
    },
    #[error("{path}: line {line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Walks the tab-delimited rows of `path`, skipping the header line and
/// blank lines. The callback receives the 1-based line number and the fields,
/// untrimmed. A file with no header at all has no rows.
pub(crate) fn for_each_data_row<F>(path: &Path, mut visit: F) -> Result<(), InputError>
where
    F: FnMut(usize, &[&str]) -> Result<(), InputError>,
{
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    if reader.read_line(&mut buf)? == 0 {
        return Ok(());
    }

    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        visit(line_no, &fields)?;
    }
    Ok(())
}

pub(crate) fn field<'a>(
    path: &Path,
    line: usize,
    fields: &[&'a str],
    column: usize,
) -> Result<&'a str, InputError> {
    fields
        .get(column)
        .copied()
        .ok_or_else(|| InputError::MissingColumn {
            path: path.to_path_buf(),
            line,
            column,
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
