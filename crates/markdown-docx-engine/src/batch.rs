//! # Batch Conversion
//!
//! Converts a fixed list of files one after another. A failure on one file is
//! recorded and the batch moves on; only an unusable output directory stops
//! the run, and that happens before any file is touched.

use std::path::{Path, PathBuf};

use crate::convert::{ConvertError, ConvertedFile, convert_file};
use crate::io::{self, IoError};
use crate::render::RenderOptions;

/// What to convert and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Source names relative to `source_dir`, in conversion order.
    pub files: Vec<String>,
}

#[derive(Debug)]
pub enum FileOutcome {
    Converted(ConvertedFile),
    /// The source file does not exist.
    Missing,
    Failed(ConvertError),
    /// Conversion reported success but no output file is on disk.
    NotCreated,
}

#[derive(Debug)]
pub struct FileReport {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FileOutcome::Converted(_))
    }
}

#[derive(Debug)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.files.len() - self.success_count()
    }
}

/// Runs the batch, calling `on_file` as each file finishes.
///
/// Fails only if the output directory cannot be created.
pub fn run_batch<F>(
    job: &BatchJob,
    options: &RenderOptions,
    mut on_file: F,
) -> Result<BatchReport, IoError>
where
    F: FnMut(&FileReport),
{
    io::prepare_output_dir(&job.output_dir)?;
    log::info!(
        "Converting {} files from {} into {}",
        job.files.len(),
        job.source_dir.display(),
        job.output_dir.display()
    );

    let mut files = Vec::with_capacity(job.files.len());
    for name in &job.files {
        let report = convert_one(job, name, options);
        on_file(&report);
        files.push(report);
    }

    Ok(BatchReport {
        output_dir: job.output_dir.clone(),
        files,
    })
}

fn convert_one(job: &BatchJob, name: &str, options: &RenderOptions) -> FileReport {
    let input = job.source_dir.join(name);
    let output = job.output_dir.join(io::output_name(name));

    let outcome = if !input.is_file() {
        log::warn!("Source file not found: {}", input.display());
        FileOutcome::Missing
    } else {
        let result = ensure_parent(&output).and_then(|()| convert_file(&input, &output, options));
        classify_outcome(&input, &output, result)
    };

    FileReport {
        name: name.to_string(),
        input,
        output,
        outcome,
    }
}

/// A conversion only counts when its output is on disk afterwards.
fn classify_outcome(
    input: &Path,
    output: &Path,
    result: Result<ConvertedFile, ConvertError>,
) -> FileOutcome {
    match result {
        Ok(converted) if converted.bytes.is_some() => {
            log::info!("Converted {} -> {}", input.display(), output.display());
            FileOutcome::Converted(converted)
        }
        Ok(_) => {
            log::error!("Output was not created: {}", output.display());
            FileOutcome::NotCreated
        }
        Err(e) => {
            log::error!("Failed to convert {}: {e}", input.display());
            FileOutcome::Failed(e)
        }
    }
}

/// Names like `guides/setup.md` need their subdirectory under the output dir.
fn ensure_parent(output: &Path) -> Result<(), ConvertError> {
    match output.parent() {
        Some(parent) => {
            io::prepare_output_dir(parent).map_err(|source| ConvertError::OutputDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        None => Ok(()),
    }
}
