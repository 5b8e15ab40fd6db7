//! Inserting `#include` and `using` lines into source text

pub mod buffer;
pub mod comments;
pub mod directive;
pub mod formatter;
pub mod report;


pub use buffer::Buffer;
pub use directive::{Directive, DirectiveKind};
pub use formatter::{InsertedLine, SECTION_GAP, insert_directive};
pub use report::{Report, include_symbol};
