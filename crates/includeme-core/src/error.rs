//! Errors raised while building an index

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// The combined input had no usable entries.
    #[error("no definitions found")]
    Empty,
}
