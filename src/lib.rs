pub mod aggregate;
pub mod config;
pub mod consts;
pub mod error;
pub mod executor;
pub mod fastq;
pub mod io;
pub mod phred;
pub mod tracing;
