//! Loading and saving per-language catalog files.
//!
//! A catalog that does not exist yet loads as an empty document. Saving
//! writes the whole document to a temporary file in the target directory and
//! renames it over `<language>.json`, so a crash mid-write never leaves a
//! truncated catalog behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::ConvertError;
use crate::catalog::LanguageDocument;

/// Path of the catalog for `language` inside `output_dir`.
pub fn document_path(output_dir: &Path, language: &str) -> PathBuf {
    output_dir.join(format!("{language}.json"))
}

/// Loads an existing catalog, or an empty document when the file is absent.
pub fn load(path: &Path) -> Result<LanguageDocument, ConvertError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("{} does not exist yet, starting empty", path.display());
            return Ok(LanguageDocument::default());
        }
        Err(e) => {
            return Err(ConvertError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    serde_json::from_str(&content).map_err(|e| ConvertError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Serializes the document (2-space indent, trailing newline) and writes it
/// atomically over `path`.
pub fn save(path: &Path, document: &LanguageDocument) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(document).map_err(|e| ConvertError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let io_err = |e: std::io::Error| ConvertError::Io {
        path: path.display().to_string(),
        source: e,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.write_all(b"\n").map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}
