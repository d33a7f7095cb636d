//! Diff report and match statistics

use crate::diff::LineMatch;
use std::io::{self, Write};

/// Result of checking one edge list against a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    /// Unmatched lines, verbatim, in encounter order
    pub differences: Vec<String>,

    /// Aggregate match statistics
    pub stats: MatchStats,
}

impl DiffReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            differences: Vec::new(),
            stats: MatchStats::default(),
        }
    }

    /// Record the outcome for one checked line and update statistics
    pub fn record(&mut self, line: String, matched: LineMatch) {
        self.stats.checked_lines += 1;
        match matched {
            LineMatch::Exact => self.stats.exact_matches += 1,
            LineMatch::Swapped => self.stats.swapped_matches += 1,
            LineMatch::Missing => {
                self.stats.differences += 1;
                self.differences.push(line);
            }
        }
    }

    /// True when every checked line had a match
    pub fn is_clean(&self) -> bool {
        self.differences.is_empty()
    }

    /// Write the contract output: `Ok` for a clean report, otherwise every
    /// differing line exactly as it was read, with no added separators.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        if self.is_clean() {
            writeln!(out, "Ok")?;
        } else {
            for line in &self.differences {
                out.write_all(line.as_bytes())?;
            }
        }
        out.flush()
    }

    /// One-line human summary of the match counts
    pub fn summary(&self) -> String {
        format!(
            "Checked: {}  Exact: {}  Swapped: {}  Differences: {}",
            self.stats.checked_lines,
            self.stats.exact_matches,
            self.stats.swapped_matches,
            self.stats.differences
        )
    }
}

impl Default for DiffReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a diff report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchStats {
    /// Total checked lines
    pub checked_lines: usize,

    /// Lines matched by exact text
    pub exact_matches: usize,

    /// Lines matched only in swapped endpoint order
    pub swapped_matches: usize,

    /// Lines with no match
    pub differences: usize,
}
