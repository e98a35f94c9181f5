use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the scores of one source are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Console,
    File(PathBuf),
}

/// One position and its average score, only alive while rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputRow {
    pub position: usize,
    pub score: f64,
}

pub fn rows(scores: &[f64]) -> impl Iterator<Item = OutputRow> + '_ {
    scores
        .iter()
        .enumerate()
        .map(|(position, score)| OutputRow {
            position,
            score: *score,
        })
}

// Debug formatting keeps the decimal point on whole numbers (0.0, not 0)
fn format_score(score: f64) -> String {
    format!("{:?}", score)
}

/// Writes `<position>: <score>` lines
pub fn write_console_lines<W: Write>(scores: &[f64], mut writer: W) -> io::Result<()> {
    for row in rows(scores) {
        writeln!(writer, "{}: {}", row.position, format_score(row.score))?;
    }
    writer.flush()
}

/// Writes `<position>,<score>` rows, no header
pub fn write_csv_rows<W: Write>(scores: &[f64], mut writer: W) -> io::Result<()> {
    for row in rows(scores) {
        writeln!(writer, "{},{}", row.position, format_score(row.score))?;
    }
    writer.flush()
}

pub fn create_output_file(path: &Path) -> Result<File> {
    info!("creating output file {:?}", path);

    Ok(File::create(path)?)
}

pub fn emit(scores: &[f64], destination: &Destination) -> Result<()> {
    match destination {
        Destination::Console => {
            let stdout = io::stdout();
            write_console_lines(scores, stdout.lock())?;
        }
        Destination::File(path) => {
            let writer = BufWriter::new(create_output_file(path)?);
            write_csv_rows(scores, writer)?;
        }
    }
    Ok(())
}
