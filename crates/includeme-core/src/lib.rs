//! Includeme Core — symbol index, lookup, and token handling

pub mod error;
pub mod index;
pub mod model;
pub mod resolver;
pub mod token;

#[cfg(test)]
mod tests;

pub use error::IndexError;
pub use index::{InOrder, SymbolIndex};
pub use model::{IndexEntry, Mode, ResolvedSymbol, TableValue};
pub use token::{token_at, validate_token};
