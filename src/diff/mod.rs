//! Diff engine - Line matching and report generation

mod compare;
mod report;

pub use compare::{diff_edge_lists, match_line, LineMatch};
pub use report::{DiffReport, MatchStats};
