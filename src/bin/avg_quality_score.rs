use anyhow::Context;
use clap::Parser;
use indicatif::ProgressIterator;
use qscore::aggregate::average_quality;
use qscore::config::{RunConfig, SourcePlan};
use qscore::consts::DEFAULT_BACKEND;
use qscore::executor::{AnyExecutor, Backend};
use qscore::fastq::read_quality_lines;
use qscore::io::emit;
use qscore::tracing::start_qscore_tracing_subscriber;
use std::path::PathBuf;
use tracing::{error, info};

/// Writes the average Phred quality score of every base position across all reads
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    /// Number of workers used to sum quality lines
    workers: u64,

    #[arg(short, long, verbatim_doc_comment)]
    /// Where to write the scores (CSV).
    /// With one FASTQ file and no output, scores are printed to stdout.
    /// If a directory is provided, '<name>.output.csv' is written inside it.
    /// With several FASTQ files this must be a directory (default: current directory).
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = DEFAULT_BACKEND)]
    /// Which worker pool implementation to use
    backend: Backend,

    #[arg(required = true)]
    /// FASTQ files to process
    fastq_files: Vec<PathBuf>,
}

fn run(config: RunConfig) -> anyhow::Result<()> {
    let plans = config.plan_outputs()?;

    let executor = AnyExecutor::new(config.backend, config.workers)
        .context("could not start worker pool")?;
    info!(
        "using {} {:?} workers for {} file(s)",
        config.workers,
        config.backend,
        plans.len()
    );

    let show_progress = plans.len() > 1;
    let plans = plans.into_iter();
    let plans: Box<dyn Iterator<Item = SourcePlan>> = if show_progress {
        Box::new(plans.progress())
    } else {
        Box::new(plans)
    };

    // Nothing is written until every source has been averaged, so a failing
    // source leaves no output behind
    let mut averaged: Vec<(SourcePlan, Vec<f64>)> = Vec::new();
    for plan in plans {
        info!("reading quality lines from {:?}", plan.source);
        let quality_lines = read_quality_lines(&plan.source)
            .with_context(|| format!("could not process {:?}", plan.source))?;
        info!("{} reads in {:?}", quality_lines.len(), plan.source);

        let scores = average_quality(&executor, quality_lines)
            .with_context(|| format!("could not average scores of {:?}", plan.source))?;
        info!("averaged {} positions of {:?}", scores.len(), plan.source);
        averaged.push((plan, scores));
    }

    for (plan, scores) in averaged {
        emit(&scores, &plan.destination)
            .with_context(|| format!("could not write scores of {:?}", plan.source))?;
    }

    Ok(())
}

fn main() {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_qscore_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();
    let config = RunConfig {
        workers: args.workers as usize,
        backend: args.backend,
        output_location: args.output,
        sources: args.fastq_files,
    };

    match run(config) {
        Ok(()) => info!("done!"),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
