//! Symbol lookup with one level of alias indirection

use tracing::debug;

use crate::index::SymbolIndex;
use crate::model::{ResolvedSymbol, TableValue};

impl SymbolIndex {
    /// Resolve a token to its canonical name and headers.
    ///
    /// A direct entry resolves to itself. An alias is followed exactly once;
    /// if its target is missing or is another alias the lookup fails.
    pub fn lookup(&self, name: &str) -> Option<ResolvedSymbol> {
        match self.get(name)? {
            TableValue::Headers(headers) => Some(ResolvedSymbol {
                canonical_name: name.to_string(),
                headers: headers.clone(),
            }),
            TableValue::Alias(target) => match self.get(target) {
                Some(TableValue::Headers(headers)) => Some(ResolvedSymbol {
                    canonical_name: target.clone(),
                    headers: headers.clone(),
                }),
                Some(TableValue::Alias(next)) => {
                    debug!("Alias {} -> {} chains to {}, not following", name, target, next);
                    None
                }
                None => {
                    debug!("Dangling alias {} -> {}", name, target);
                    None
                }
            },
        }
    }
}
