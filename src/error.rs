use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid FASTQ format: {line_count} lines is not a multiple of 4")]
    StructuralFormat { line_count: usize },
    #[error("cannot average an empty group of quality lines")]
    EmptyGroup,
    #[error("quality line {line} has length {found}, expected {expected}")]
    LengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("a worker stopped before reporting its result")]
    WorkerPanicked,
    #[error("could not start rayon thread pool: {0}")]
    ExecutorBuild(#[from] rayon::ThreadPoolBuildError),
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    #[error("output location {path:?} must be a directory when several sources are given")]
    OutputNotDirectory { path: PathBuf },
    #[error("several sources would write to {path:?}")]
    DuplicateOutput { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
