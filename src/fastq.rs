use crate::consts::{QUALITY_LINE_OFFSET, RECORD_LINES};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Pulls the quality line out of every 4-line record, in record order.
///
/// Only the line count is validated; identifier, sequence and separator lines
/// are never inspected. Trailing whitespace is stripped from each quality line.
pub fn extract_quality_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    if lines.len() % RECORD_LINES != 0 {
        return Err(Error::StructuralFormat {
            line_count: lines.len(),
        });
    }

    Ok(lines
        .iter()
        .skip(QUALITY_LINE_OFFSET)
        .step_by(RECORD_LINES)
        .map(|line| line.as_ref().trim_end().to_string())
        .collect())
}

/// Reads a whole FASTQ file into memory and extracts its quality lines
pub fn read_quality_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;

    debug!("read {} lines from {:?}", lines.len(), path);

    extract_quality_lines(&lines)
}
