//! Edge - one weighted undirected edge parsed from an edge-list line

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Failure to parse an edge-list line into `(v1, v2, w)`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EdgeParseError {
    /// Line did not split into exactly three fields
    #[error("expected 3 whitespace-separated fields, found {found}")]
    FieldCount { found: usize },

    /// A field was not a valid integer
    #[error("field {index} is not an integer: {source}")]
    InvalidInteger { index: usize, source: ParseIntError },
}

/// A weighted undirected edge
///
/// `(v1, v2, w)` and `(v2, v1, w)` denote the same edge; the struct keeps
/// the endpoint order it was parsed with so the swapped text form can be
/// reconstructed exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// First endpoint as written
    pub v1: i64,

    /// Second endpoint as written
    pub v2: i64,

    /// Edge weight
    pub weight: i64,
}

impl Edge {
    /// Create a new edge
    pub fn new(v1: i64, v2: i64, weight: i64) -> Self {
        Self { v1, v2, weight }
    }

    /// The same edge with its endpoints in the opposite order
    pub fn swapped(&self) -> Self {
        Self {
            v1: self.v2,
            v2: self.v1,
            weight: self.weight,
        }
    }
}

impl fmt::Display for Edge {
    /// Canonical single-space text form, no trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.v1, self.v2, self.weight)
    }
}

impl FromStr for Edge {
    type Err = EdgeParseError;

    /// Parse `v1 v2 w` from a line with its trailing newline already removed.
    ///
    /// Fields are split on runs of ASCII whitespace, so both space- and
    /// tab-delimited edge lists are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(EdgeParseError::FieldCount {
                found: fields.len(),
            });
        }

        let parse_field = |index: usize| -> Result<i64, EdgeParseError> {
            fields[index]
                .parse()
                .map_err(|source| EdgeParseError::InvalidInteger { index, source })
        };

        Ok(Self {
            v1: parse_field(0)?,
            v2: parse_field(1)?,
            weight: parse_field(2)?,
        })
    }
}
