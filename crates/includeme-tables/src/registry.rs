//! Lazily built per-mode symbol indexes

use std::sync::Arc;

use dashmap::DashMap;
use includeme_core::{Mode, ResolvedSymbol, SymbolIndex, validate_token};
use tracing::{debug, info, warn};

use crate::config::IncludemeConfig;
use crate::error::ResolveError;

/// Cache of built indexes keyed by mode.
///
/// An index is built from the mode's registered tables on first use and
/// stays cached until [`Registry::reload`] or [`Registry::evict`]. A failed
/// build caches nothing, so the next query retries.
pub struct Registry {
    config: IncludemeConfig,
    indexes: DashMap<Mode, Arc<SymbolIndex>>,
}

impl Registry {
    pub fn new(config: IncludemeConfig) -> Self {
        Registry {
            config,
            indexes: DashMap::new(),
        }
    }

    pub fn config(&self) -> &IncludemeConfig {
        &self.config
    }

    /// Swap in a new config and drop every cached index.
    pub fn set_config(&mut self, config: IncludemeConfig) {
        self.config = config;
        self.reload();
    }

    /// The index for `mode`, building it if needed.
    pub fn index(&self, mode: &Mode) -> Result<Arc<SymbolIndex>, ResolveError> {
        if let Some(index) = self.indexes.get(mode) {
            return Ok(Arc::clone(index.value()));
        }

        let sources = self
            .config
            .tables_for(mode)
            .ok_or_else(|| ResolveError::ModeUnsupported(mode.clone()))?;

        let mut entries = Vec::new();
        for source in &sources {
            match source.load() {
                Ok(loaded) => entries.extend(loaded),
                Err(e) => warn!("Skipping table: {}", e),
            }
        }

        let index = SymbolIndex::try_build(entries).map_err(|_| ResolveError::EmptyIndex(mode.clone()))?;
        info!(
            "Built {} index: {} entries from {} tables, height {}",
            mode,
            index.len(),
            sources.len(),
            index.height()
        );

        let index = Arc::new(index);
        let cached = self.indexes.entry(mode.clone()).or_insert(index);
        Ok(Arc::clone(cached.value()))
    }

    /// Resolve `token` against the index for `mode`.
    pub fn resolve(&self, token: &str, mode: &Mode) -> Result<ResolvedSymbol, ResolveError> {
        if !validate_token(token) {
            return Err(ResolveError::InvalidToken(token.to_string()));
        }
        let index = self.index(mode)?;
        let resolved = index.lookup(token).ok_or_else(|| ResolveError::NotFound {
            token: token.to_string(),
            mode: mode.clone(),
        })?;
        debug!("Resolved {} -> {} {:?}", token, resolved.canonical_name, resolved.headers);
        Ok(resolved)
    }

    /// Whether an index for `mode` is currently cached.
    pub fn is_cached(&self, mode: &Mode) -> bool {
        self.indexes.contains_key(mode)
    }

    /// Drop one mode's index. Returns whether anything was cached.
    pub fn evict(&self, mode: &Mode) -> bool {
        self.indexes.remove(mode).is_some()
    }

    /// Drop every cached index so the next query rebuilds from the tables.
    pub fn reload(&self) {
        debug!("Clearing {} cached indexes", self.indexes.len());
        self.indexes.clear();
    }

    /// Release the registry and all indexes not still held by callers.
    pub fn teardown(self) {
        self.reload();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(IncludemeConfig::default())
    }
}
