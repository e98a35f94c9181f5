use crate::consts::OUTPUT_SUFFIX;
use crate::error::{Error, Result};
use crate::executor::Backend;
use crate::io::Destination;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Everything a run needs once the command line has been parsed
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub workers: usize,
    pub backend: Backend,
    pub output_location: Option<PathBuf>,
    pub sources: Vec<PathBuf>,
}

/// A source paired with where its scores go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlan {
    pub source: PathBuf,
    pub destination: Destination,
}

impl RunConfig {
    pub fn plan_outputs(&self) -> Result<Vec<SourcePlan>> {
        plan_outputs(&self.sources, self.output_location.as_deref())
    }
}

/// `<dir>/<source stem>.output.csv`
pub fn output_path_for(source: &Path, dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "reads".to_string());
    dir.join(format!("{}.{}", stem, OUTPUT_SUFFIX))
}

/// Decides the destination of every source.
///
/// A single source prints to the console unless an output location is given,
/// in which case a file is written there (or inside it, when it is a directory).
/// Several sources always get one file each, in the output directory if given
/// or in the current directory otherwise; a non-directory output location is
/// rejected for them, as are two sources whose output files would collide.
pub fn plan_outputs(sources: &[PathBuf], output_location: Option<&Path>) -> Result<Vec<SourcePlan>> {
    if let [source] = sources {
        let destination = match output_location {
            None => Destination::Console,
            Some(location) if location.is_dir() => {
                Destination::File(output_path_for(source, location))
            }
            Some(location) => Destination::File(location.to_path_buf()),
        };
        return Ok(vec![SourcePlan {
            source: source.clone(),
            destination,
        }]);
    }

    let dir = match output_location {
        None => PathBuf::from("."),
        Some(location) if location.is_dir() => location.to_path_buf(),
        Some(location) => {
            return Err(Error::OutputNotDirectory {
                path: location.to_path_buf(),
            })
        }
    };

    let mut seen = HashSet::with_capacity(sources.len());
    let mut plans = Vec::with_capacity(sources.len());
    for source in sources {
        let path = output_path_for(source, &dir);
        if !seen.insert(path.clone()) {
            return Err(Error::DuplicateOutput { path });
        }
        plans.push(SourcePlan {
            source: source.clone(),
            destination: Destination::File(path),
        });
    }
    Ok(plans)
}
