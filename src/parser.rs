//! Splits a snippet file into its five-line metadata header and its code
//! block.
//!
//! The layout is positional: category, title, description, tags, author, one
//! per line, each behind the language's line-comment marker, then a blank
//! separator, then the code. The code block is carried verbatim, including
//! internal blank lines and the empty string produced by the source file's
//! trailing newline.

use thiserror::Error;

use crate::catalog::Snippet;
use crate::language;

/// Number of metadata lines at the top of every snippet file.
pub const HEADER_LINES: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "input has {found} line(s) but needs at least {min} (5 metadata lines plus a blank separator)",
        min = HEADER_LINES + 1
    )]
    TooShort { found: usize },

    #[error("line {line} must be blank to separate the header from the code", line = HEADER_LINES + 1)]
    MissingSeparator,

    #[error("the {field} line (line {line}) is empty")]
    EmptyField { field: &'static str, line: usize },
}

/// Parses a snippet file into its category name and snippet record.
pub fn parse(source: &str) -> Result<(String, Snippet), ParseError> {
    // CRLF input is accepted; the per-line `\r` is not part of the content.
    let lines: Vec<&str> = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() < HEADER_LINES + 1 {
        return Err(ParseError::TooShort { found: lines.len() });
    }
    if !lines[HEADER_LINES].trim().is_empty() {
        return Err(ParseError::MissingSeparator);
    }

    let category = required_field(lines[0], "category", 1)?;
    let title = required_field(lines[1], "title", 2)?;
    let description = required_field(lines[2], "description", 3)?;
    let tags = split_tags(&strip_comment_marker(lines[3]));
    let author = required_field(lines[4], "author", 5)?;

    let code: Vec<String> = lines[HEADER_LINES + 1..]
        .iter()
        .map(|line| (*line).to_string())
        .collect();

    Ok((
        category,
        Snippet {
            title,
            description,
            code,
            tags,
            author,
        },
    ))
}

/// Removes one leading comment marker (longest match wins, so `//` is never
/// read as an empty marker plus a slash) and surrounding whitespace.
fn strip_comment_marker(line: &str) -> String {
    let trimmed = line.trim_start();
    for marker in language::comment_markers() {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return rest.trim().to_string();
        }
    }
    trimmed.trim_end().to_string()
}

/// Splits the tags line on commas, trimming each tag. Empty tokens are
/// dropped, so a bare marker line yields no tags at all.
fn split_tags(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn required_field(line: &str, field: &'static str, line_no: usize) -> Result<String, ParseError> {
    let value = strip_comment_marker(line);
    if value.is_empty() {
        return Err(ParseError::EmptyField {
            field,
            line: line_no,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(header_marker: &str, code: &str) -> String {
        format!(
            "{m} Basics\n{m} Hello, World!\n{m} Prints a greeting to standard output\n{m} printing, basics\n{m} Ada Lovelace\n\n{code}",
            m = header_marker,
            code = code
        )
    }

    #[test]
    fn parses_python_style_header() {
        let (category, snippet) = parse(&sample("#", "print(\"Hello, world!\")\n")).unwrap();
        assert_eq!(category, "Basics");
        assert_eq!(snippet.title, "Hello, World!");
        assert_eq!(snippet.description, "Prints a greeting to standard output");
        assert_eq!(snippet.tags, vec!["printing", "basics"]);
        assert_eq!(snippet.author, "Ada Lovelace");
    }

    #[test]
    fn parses_slash_style_header() {
        let (category, snippet) = parse(&sample("//", "console.log(\"hi\");\n")).unwrap();
        assert_eq!(category, "Basics");
        assert_eq!(snippet.code, vec!["console.log(\"hi\");", ""]);
    }

    #[test]
    fn trailing_newline_is_kept_as_empty_code_line() {
        let (_, snippet) = parse(&sample("#", "print(\"Hello, world!\")\n")).unwrap();
        assert_eq!(snippet.code, vec!["print(\"Hello, world!\")", ""]);
    }

    #[test]
    fn code_line_count_matches_source() {
        let code = "def f():\n\n    return 1\n";
        let (_, snippet) = parse(&sample("#", code)).unwrap();
        // Three source lines plus the preserved trailing blank.
        assert_eq!(snippet.code, vec!["def f():", "", "    return 1", ""]);
    }

    #[test]
    fn code_is_not_reindented() {
        let (_, snippet) = parse(&sample("#", "\tif True:\n\t\tpass")).unwrap();
        assert_eq!(snippet.code, vec!["\tif True:", "\t\tpass"]);
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        let input = "# c\n# t\n# d\n# a, b,c\n# auth\n\ncode";
        let (_, snippet) = parse(input).unwrap();
        assert_eq!(snippet.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_tags_line_gives_empty_list() {
        let input = "# c\n# t\n# d\n#\n# auth\n\ncode";
        let (_, snippet) = parse(input).unwrap();
        assert_eq!(snippet.tags, Vec::<String>::new());
    }

    #[test]
    fn empty_code_block_is_permitted() {
        let input = "# c\n# t\n# d\n# tag\n# auth\n";
        let (_, snippet) = parse(input).unwrap();
        assert_eq!(snippet.code, Vec::<String>::new());
    }

    #[test]
    fn too_few_lines_is_malformed() {
        assert_eq!(
            parse("# c\n# t\n# d\n"),
            Err(ParseError::TooShort { found: 4 })
        );
    }

    #[test]
    fn missing_blank_separator_is_malformed() {
        let input = "# c\n# t\n# d\n# tag\n# auth\ncode_starts_here\n";
        assert_eq!(parse(input), Err(ParseError::MissingSeparator));
    }

    #[test]
    fn empty_required_field_is_malformed() {
        let input = "# c\n#\n# d\n# tag\n# auth\n\ncode";
        assert_eq!(
            parse(input),
            Err(ParseError::EmptyField {
                field: "title",
                line: 2
            })
        );
    }

    #[test]
    fn crlf_input_is_accepted() {
        let input = "# c\r\n# t\r\n# d\r\n# a, b\r\n# auth\r\n\r\nprint(1)\r\n";
        let (category, snippet) = parse(input).unwrap();
        assert_eq!(category, "c");
        assert_eq!(snippet.tags, vec!["a", "b"]);
        assert_eq!(snippet.code, vec!["print(1)", ""]);
    }

    #[test]
    fn marker_is_only_stripped_once() {
        let input = "# c\n# ## double hash title\n# d\n# tag\n# auth\n\ncode";
        let (_, snippet) = parse(input).unwrap();
        assert_eq!(snippet.title, "## double hash title");
    }
}
