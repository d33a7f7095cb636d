//! Line matching logic

use crate::diff::DiffReport;
use crate::types::{Edge, EdgeDiffError, EdgeParseError};
use std::path::Path;

/// How a checked line related to the reference line list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch {
    /// The exact text occurs in the reference list
    Exact,

    /// Only the swapped-endpoint text occurs in the reference list
    Swapped,

    /// Neither form occurs; the line is a difference
    Missing,
}

/// Match one checked line against the reference line list
///
/// Matching is text-based, in two tiers:
///
/// 1. **Exact containment**: the line occurs verbatim in the reference list.
///    This never parses the line, so a malformed line that both files share
///    is accepted as-is.
/// 2. **Swapped containment**: the line parses into `v1 v2 w` and the
///    reconstructed `"v2 v1 w"` text occurs in the reference list, either
///    newline-terminated or bare. The bare form covers a reference file
///    whose last line has no trailing newline.
///
/// # Errors
///
/// Returns the parse failure when the line misses tier 1 and cannot be
/// split into three integer fields. A line that merely has no match is not
/// an error; it comes back as [`LineMatch::Missing`].
pub fn match_line(line: &str, reference: &[String]) -> Result<LineMatch, EdgeParseError> {
    if reference.iter().any(|r| r == line) {
        return Ok(LineMatch::Exact);
    }

    let edge: Edge = line.strip_suffix('\n').unwrap_or(line).parse()?;
    let swapped = edge.swapped().to_string();
    let swapped_terminated = format!("{swapped}\n");

    if reference
        .iter()
        .any(|r| r == &swapped_terminated || r == &swapped)
    {
        Ok(LineMatch::Swapped)
    } else {
        Ok(LineMatch::Missing)
    }
}

/// Run the containment check for every checked line, in order
///
/// `checked` streams raw lines (newlines preserved) of the file under test;
/// `reference` is the fully materialized reference line list. Produces a
/// [`DiffReport`] holding every unmatched line verbatim plus match counts.
///
/// # Errors
///
/// * `EdgeDiffError::Io` - reading the checked stream failed.
/// * `EdgeDiffError::MalformedLine` - a non-matching line did not parse;
///   `checked_path` and the 1-based line number identify it.
pub fn diff_edge_lists<I>(
    checked: I,
    reference: &[String],
    checked_path: &Path,
) -> Result<DiffReport, EdgeDiffError>
where
    I: IntoIterator<Item = Result<String, std::io::Error>>,
{
    let mut report = DiffReport::new();

    for (index, line) in checked.into_iter().enumerate() {
        let line = line?;
        let matched =
            match_line(&line, reference).map_err(|source| EdgeDiffError::MalformedLine {
                path: checked_path.to_path_buf(),
                line: index + 1,
                text: line.strip_suffix('\n').unwrap_or(&line).to_string(),
                source,
            })?;
        report.record(line, matched);
    }

    Ok(report)
}
