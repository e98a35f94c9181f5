use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::phred::PositionSums;
use itertools::Itertools;
use tracing::debug;

/// A contiguous run of a source's quality lines, processed as one unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityChunk {
    pub first_line: usize,
    pub lines: Vec<String>,
}

/// Splits quality lines into at most `parts` contiguous chunks of near-equal size
pub fn partition(lines: Vec<String>, parts: usize) -> Vec<QualityChunk> {
    if lines.is_empty() {
        return Vec::new();
    }
    let chunk_len = lines.len().div_ceil(parts.max(1));

    let chunks = lines.into_iter().chunks(chunk_len);
    let quality_chunks = (&chunks)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| QualityChunk {
            first_line: i * chunk_len,
            lines: chunk.collect_vec(),
        })
        .collect_vec();
    quality_chunks
}

/// Averages the quality lines of one source across the executor's workers.
///
/// Each chunk is summed on its own; partial sums are merged in line order so the
/// result is identical to averaging the whole group at once.
pub fn average_quality<E: Executor>(executor: &E, lines: Vec<String>) -> Result<Vec<f64>> {
    if lines.is_empty() {
        return Err(Error::EmptyGroup);
    }

    let chunks = partition(lines, executor.workers());
    debug!(
        "summing {} chunks across {} workers",
        chunks.len(),
        executor.workers()
    );

    let partial_sums = executor.map(chunks, |chunk| {
        PositionSums::from_lines(chunk.first_line, &chunk.lines).map(|sums| (chunk.first_line, sums))
    })?;

    let mut merged: Option<PositionSums> = None;
    for partial in partial_sums {
        let (first_line, sums) = partial?;
        merged = Some(match merged {
            None => sums,
            Some(acc) => acc.merge(sums, first_line)?,
        });
    }

    merged.ok_or(Error::EmptyGroup)?.finalize()
}
