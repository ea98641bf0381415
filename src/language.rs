//! The language registry and output-language resolution.
//!
//! Every snippet lands in a `<language>.json` catalog file. The language
//! comes from an explicit CLI argument when given, otherwise from the input
//! file's extension, otherwise from the comment marker on the first header
//! line. Supporting another language is a single new [`LanguageSpec`] entry.

use std::path::Path;

use thiserror::Error;

/// One supported language: the catalog name, the file extensions it claims,
/// and the line-comment marker its snippet headers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub comment_marker: &'static str,
}

/// Known languages, in resolution priority order. The comment-marker
/// heuristic takes the first entry whose marker matches, so languages
/// sharing a marker are ordered by how likely their snippets are.
pub const LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "python",
        extensions: &["py", "pyw"],
        comment_marker: "#",
    },
    LanguageSpec {
        name: "javascript",
        extensions: &["js", "mjs", "cjs"],
        comment_marker: "//",
    },
    LanguageSpec {
        name: "typescript",
        extensions: &["ts", "tsx"],
        comment_marker: "//",
    },
    LanguageSpec {
        name: "rust",
        extensions: &["rs"],
        comment_marker: "//",
    },
    LanguageSpec {
        name: "go",
        extensions: &["go"],
        comment_marker: "//",
    },
    LanguageSpec {
        name: "c",
        extensions: &["c", "h"],
        comment_marker: "//",
    },
    LanguageSpec {
        name: "ruby",
        extensions: &["rb"],
        comment_marker: "#",
    },
    LanguageSpec {
        name: "shell",
        extensions: &["sh", "bash"],
        comment_marker: "#",
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "cannot determine the target language for `{path}`; pass it explicitly: snipcat convert {path} <language>"
)]
pub struct UnknownLanguage {
    pub path: String,
}

/// Comment markers recognized when stripping header lines, longest first so
/// that a two-character marker is never shadowed by a one-character one.
pub fn comment_markers() -> Vec<&'static str> {
    let mut markers: Vec<&'static str> = LANGUAGES.iter().map(|l| l.comment_marker).collect();
    markers.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    markers.dedup();
    markers
}

/// Resolves the catalog language for `path`.
///
/// An explicit language is accepted verbatim (lowercased) even when the
/// registry does not know it; the registry only gates inference.
pub fn resolve(
    path: &Path,
    explicit: Option<&str>,
    first_line: &str,
) -> Result<String, UnknownLanguage> {
    if let Some(explicit) = explicit.map(str::trim).filter(|l| !l.is_empty()) {
        return Ok(explicit.to_ascii_lowercase());
    }

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_ascii_lowercase();
        if let Some(spec) = LANGUAGES.iter().find(|l| l.extensions.contains(&ext.as_str())) {
            return Ok(spec.name.to_string());
        }
    }

    let line = first_line.trim_start();
    if !line.is_empty() {
        if let Some(spec) = LANGUAGES.iter().find(|l| line.starts_with(l.comment_marker)) {
            log::debug!(
                "inferred language `{}` from comment marker `{}`",
                spec.name,
                spec.comment_marker
            );
            return Ok(spec.name.to_string());
        }
    }

    Err(UnknownLanguage {
        path: path.display().to_string(),
    })
}
