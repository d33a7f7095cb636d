//! Core type definitions for edgediff

mod edge;
mod error;

pub use edge::{Edge, EdgeParseError};
pub use error::EdgeDiffError;
