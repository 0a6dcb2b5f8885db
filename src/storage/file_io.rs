//! File I/O utilities
//!
//! Reads the input document (JSON or YAML) and writes report files atomically
//! so a failed run never leaves a half-written page behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{SplitterError, SplitterResult};
use crate::models::de::with_scalar_text;
use crate::models::ProjectInput;

/// Input document format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect the format from a path; anything not `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read the project input document
pub fn read_project_input<P: AsRef<Path>>(path: P) -> SplitterResult<ProjectInput> {
    read_document(path.as_ref())
}

/// Read and deserialize a document, returning an error if the file doesn't exist
pub fn read_document<T: DeserializeOwned>(path: &Path) -> SplitterResult<T> {
    if !path.exists() {
        return Err(SplitterError::io(path, "file not found"));
    }

    let file = File::open(path).map_err(|e| SplitterError::io(path, e))?;
    let reader = BufReader::new(file);

    match InputFormat::from_path(path) {
        InputFormat::Json => {
            serde_json::from_reader(reader).map_err(|e| SplitterError::parse(path, e))
        }
        InputFormat::Yaml => with_scalar_text(|| serde_yaml::from_reader(reader))
            .map_err(|e| SplitterError::parse(path, e)),
    }
}

/// Write text to a file atomically (write to temp, then rename)
///
/// Parent directories are created as needed.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> SplitterResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SplitterError::io(parent, e))?;
        }
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| SplitterError::io(&temp_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| SplitterError::io(&temp_path, e))?;
    writer.flush().map_err(|e| SplitterError::io(&temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SplitterError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SplitterError::io(path, e)
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
