use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Create the output directory (and parents) if it doesn't exist yet
pub fn prepare_output_dir(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path).map_err(|source| IoError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Output name for a source file: same stem, `.docx` extension.
///
/// `guides/setup.md` becomes `guides/setup.docx`; names without an
/// extension just gain one.
pub fn output_name(source_name: &str) -> PathBuf {
    Path::new(source_name).with_extension("docx")
}

/// Size of a file in bytes, or `None` if it doesn't exist
pub fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len())
}
