//! Table loading, configuration, and the per-mode index registry

pub mod builtin;
pub mod config;
pub mod derive;
pub mod error;
pub mod registry;
pub mod source;


pub use config::{CONFIG_FILE, IncludemeConfig};
pub use error::{ConfigError, ResolveError, TableError};
pub use registry::Registry;
pub use source::{TableFormat, TableSource, parse_table};
