//! # edgediff - Edge-List Comparison Tool
//!
//! Checks one serialization of a weighted undirected graph against another.
//!
//! Both inputs are plain-text edge lists, one `v1 v2 w` triple per line.
//! Every line of the checked file whose edge has no equivalent in the
//! reference file - in either endpoint order - is reported verbatim; when
//! every line matches, the single token `Ok` is printed instead.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod input;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use types::{Edge, EdgeDiffError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
