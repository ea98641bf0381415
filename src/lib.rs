pub mod catalog;
pub mod exit_codes;
pub mod language;
pub mod parser;
pub mod store;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use crate::catalog::{Category, LanguageDocument, Snippet};
pub use crate::language::{LANGUAGES, LanguageSpec};

/// Everything that can go wrong while converting one snippet file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not follow the header + blank line + code layout
    #[error("malformed input: {0}")]
    MalformedInput(#[from] parser::ParseError),

    /// No output language given and none could be inferred
    #[error(transparent)]
    UnknownLanguage(#[from] language::UnknownLanguage),

    /// Input unreadable or output unwritable
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An existing catalog file holds something other than a category array
    #[error("{path}: invalid catalog JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    /// Process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::MalformedInput(_) | ConvertError::UnknownLanguage(_) => {
                exit_codes::INVALID_INPUT
            }
            ConvertError::Io { .. } | ConvertError::Json { .. } => exit_codes::TOOL_ERROR,
        }
    }
}

/// What a successful conversion did, for reporting.
#[derive(Debug)]
pub struct Conversion {
    pub language: String,
    pub category: String,
    pub title: String,
    pub output_path: PathBuf,
    /// False when the snippet was appended to an already existing category.
    pub created_category: bool,
}

/// Converts one snippet file and merges the result into the language's
/// catalog under `output_dir`.
///
/// The pipeline is read, parse, resolve, load, merge, write, in that order,
/// so any failure happens before the catalog file is touched. Concurrent
/// invocations against the same catalog are not coordinated; the write
/// itself is atomic but the last writer wins.
pub fn convert_file(
    input: &Path,
    explicit_language: Option<&str>,
    output_dir: &Path,
) -> Result<Conversion, ConvertError> {
    let source = std::fs::read_to_string(input).map_err(|e| ConvertError::Io {
        path: input.display().to_string(),
        source: e,
    })?;

    let (category, snippet) = parser::parse(&source)?;

    let first_line = source.lines().next().unwrap_or("");
    let language = language::resolve(input, explicit_language, first_line)?;
    log::debug!("resolved language `{language}` for {}", input.display());

    let output_path = store::document_path(output_dir, &language);
    let mut document = store::load(&output_path)?;

    let created_category = !document
        .categories()
        .iter()
        .any(|c| c.category_name == category);
    let title = snippet.title.clone();
    document.insert(&category, snippet);

    store::save(&output_path, &document)?;
    log::debug!(
        "wrote {} ({} categories)",
        output_path.display(),
        document.categories().len()
    );

    Ok(Conversion {
        language,
        category,
        title,
        output_path,
        created_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HELLO: &str = "# Basics\n\
                         # Hello, World!\n\
                         # Prints a greeting to standard output\n\
                         # printing, basics\n\
                         # Ada Lovelace\n\
                         \n\
                         print(\"Hello, world!\")\n";

    #[test]
    fn convert_creates_catalog_from_scratch() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hello.py");
        std::fs::write(&input, HELLO).unwrap();

        let outcome = convert_file(&input, None, dir.path()).unwrap();
        assert_eq!(outcome.language, "python");
        assert_eq!(outcome.category, "Basics");
        assert!(outcome.created_category);

        let document = store::load(&outcome.output_path).unwrap();
        assert_eq!(document.categories().len(), 1);
        assert_eq!(document.categories()[0].snippets[0].title, "Hello, World!");
    }

    #[test]
    fn convert_appends_to_existing_category() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hello.py");
        std::fs::write(&input, HELLO).unwrap();

        convert_file(&input, None, dir.path()).unwrap();
        let second = convert_file(&input, None, dir.path()).unwrap();
        assert!(!second.created_category);

        let document = store::load(&second.output_path).unwrap();
        assert_eq!(document.categories().len(), 1);
        assert_eq!(document.categories()[0].snippets.len(), 2);
    }

    #[test]
    fn parse_failure_reports_invalid_input_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("short.py");
        std::fs::write(&input, "# only\n# four\n# header\n# lines\n").unwrap();

        let err = convert_file(&input, None, dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn missing_input_reports_tool_error_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(&dir.path().join("absent.py"), None, dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::TOOL_ERROR);
    }
}
