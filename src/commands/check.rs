//! Main check command

use crate::diff::{diff_edge_lists, DiffReport};
use crate::input;
use crate::types::EdgeDiffError;
use crate::Config;

/// Run the edge-list check
///
/// Materializes the reference file as an ordered line list, streams the
/// checked file through the diff engine in a single pass, and writes the
/// result to stdout: `Ok` when every line matched, otherwise each unmatched
/// line verbatim. With `config.verbose` a match summary goes to stderr,
/// keeping stdout parseable.
///
/// Finding differences is a normal outcome, not an error; the run only
/// fails on I/O problems or a malformed non-matching line.
pub fn run(config: &Config) -> Result<(), EdgeDiffError> {
    let report = check(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;

    if config.verbose {
        eprintln!("{}", report.summary());
    }

    Ok(())
}

/// Produce the diff report for the configured file pair without printing
pub fn check(config: &Config) -> Result<DiffReport, EdgeDiffError> {
    let reference = input::read_lines(&config.reference)?;
    let checked = input::open_raw_lines(&config.checked)?;
    diff_edge_lists(checked, &reference, &config.checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(checked: &Path, reference: &Path) -> Config {
        Config {
            checked: checked.to_path_buf(),
            reference: reference.to_path_buf(),
            verbose: false,
        }
    }

    #[test]
    fn test_check_identical_files_is_clean() {
        let dir = TempDir::new().expect("create tempdir");
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "1 2 5\n3 4 7\n").expect("write checked file");
        fs::write(&b, "1 2 5\n3 4 7\n").expect("write reference file");

        let report = check(&config_for(&a, &b)).expect("check succeeds");
        assert!(report.is_clean());
        assert_eq!(report.stats.exact_matches, 2);
    }

    #[test]
    fn test_check_collects_unmatched_lines() {
        let dir = TempDir::new().expect("create tempdir");
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "1 2 5\n3 4 7\n").expect("write checked file");
        fs::write(&b, "2 1 5\n").expect("write reference file");

        let report = check(&config_for(&a, &b)).expect("check succeeds");
        assert_eq!(report.differences, vec!["3 4 7\n".to_string()]);
        assert_eq!(report.stats.swapped_matches, 1);
    }

    #[test]
    fn test_check_missing_checked_file_is_io_error() {
        let dir = TempDir::new().expect("create tempdir");
        let b = dir.path().join("b.txt");
        fs::write(&b, "1 2 5\n").expect("write reference file");

        let result = check(&config_for(&dir.path().join("missing.txt"), &b));
        assert!(matches!(result, Err(EdgeDiffError::Io(_))));
    }

    #[test]
    fn test_check_malformed_line_reports_checked_path() {
        let dir = TempDir::new().expect("create tempdir");
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "1 2\n").expect("write checked file");
        fs::write(&b, "9 9 9\n").expect("write reference file");

        let result = check(&config_for(&a, &b));
        match result {
            Err(EdgeDiffError::MalformedLine { path, line, .. }) => {
                assert_eq!(path, a);
                assert_eq!(line, 1);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }
}
