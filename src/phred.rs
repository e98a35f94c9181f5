use crate::consts::PHRED_OFFSET;
use crate::error::{Error, Result};

/// Decodes one Phred+33 quality character: code point minus 33.
///
/// `'!'` is 0 and `'I'` is 40. Characters below `'!'` decode to negative
/// values, no range check is made.
pub fn decode_phred(c: char) -> i64 {
    c as i64 - PHRED_OFFSET
}

/// Per-position quality sums over a run of equal-length quality lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSums {
    totals: Vec<i64>,
    lines: usize,
}

impl PositionSums {
    /// Sums `lines`, whose first entry is quality line `first_line` of its source.
    /// The width is taken from the first line; any other width is rejected.
    pub fn from_lines<S: AsRef<str>>(first_line: usize, lines: &[S]) -> Result<Self> {
        let width = match lines.first() {
            Some(line) => line.as_ref().chars().count(),
            None => return Err(Error::EmptyGroup),
        };

        let mut totals = vec![0_i64; width];
        for (offset, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(Error::LengthMismatch {
                    line: first_line + offset,
                    expected: width,
                    found,
                });
            }
            for (total, c) in totals.iter_mut().zip(line.chars()) {
                *total += decode_phred(c);
            }
        }

        Ok(PositionSums {
            totals,
            lines: lines.len(),
        })
    }

    /// Adds the sums of a later chunk of the same source
    pub fn merge(mut self, other: PositionSums, other_first_line: usize) -> Result<Self> {
        if other.totals.len() != self.totals.len() {
            return Err(Error::LengthMismatch {
                line: other_first_line,
                expected: self.totals.len(),
                found: other.totals.len(),
            });
        }
        self.totals
            .iter_mut()
            .zip(other.totals)
            .for_each(|(total, other_total)| *total += other_total);
        self.lines += other.lines;
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.totals.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Divides every sum by the number of lines summed
    pub fn finalize(self) -> Result<Vec<f64>> {
        if self.lines == 0 {
            return Err(Error::EmptyGroup);
        }
        let lines = self.lines as f64;
        Ok(self
            .totals
            .into_iter()
            .map(|total| total as f64 / lines)
            .collect())
    }
}

/// Mean Phred score per position over a non-empty group of equal-length quality lines
pub fn average_scores<S: AsRef<str>>(lines: &[S]) -> Result<Vec<f64>> {
    PositionSums::from_lines(0, lines)?.finalize()
}
