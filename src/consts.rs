use crate::executor::Backend;

/// Offset of the Phred+33 (Sanger/Illumina 1.8+) quality encoding
pub const PHRED_OFFSET: i64 = 33;

/// Lines per FASTQ record: identifier, sequence, separator, quality
pub const RECORD_LINES: usize = 4;

/// Index of the quality line within a record
pub const QUALITY_LINE_OFFSET: usize = 3;

/// Appended to a source's file stem to name its output file
pub const OUTPUT_SUFFIX: &str = "output.csv";

/// Worker pool used when none is chosen on the command line
pub const DEFAULT_BACKEND: Backend = Backend::Threadpool;
