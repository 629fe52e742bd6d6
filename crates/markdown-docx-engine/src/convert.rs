use std::path::{Path, PathBuf};

use crate::docx::{DocxError, DocxSink};
use crate::io::{self, IoError};
use crate::parsing::translate;
use crate::render::{RenderOptions, render};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: IoError },
    #[error("Failed to prepare output directory {path}: {source}")]
    OutputDir { path: PathBuf, source: IoError },
    #[error("Failed to save {path}: {source}")]
    Save { path: PathBuf, source: DocxError },
}

/// A successfully written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub output: PathBuf,
    /// Size on disk, or `None` if the file vanished after saving.
    pub bytes: Option<u64>,
    pub blocks: usize,
}

/// Converts one Markdown file into a Word document at `output`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<ConvertedFile, ConvertError> {
    let source = io::read_file(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let mut sink = DocxSink::new();
    let blocks = render(translate(&source), &mut sink, options);
    log::debug!(
        "{}: {} blocks, {} body elements",
        input.display(),
        blocks,
        sink.len()
    );

    sink.save(output).map_err(|source| ConvertError::Save {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(ConvertedFile {
        output: output.to_path_buf(),
        bytes: io::file_size(output),
        blocks,
    })
}
