//! Mode → table registration loaded from `includeme.toml`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use includeme_core::Mode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::source::TableSource;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "includeme.toml";

/// Extension → mode pairs used when the config does not override them.
const DEFAULT_EXTENSIONS: &[(&str, &str)] = &[
    ("c", "c"),
    ("h", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("cxx", "cpp"),
    ("c++", "cpp"),
    ("hh", "cpp"),
    ("hpp", "cpp"),
    ("hxx", "cpp"),
    ("h++", "cpp"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludemeConfig {
    /// Table identifiers per mode, consulted in order.
    #[serde(default)]
    pub modes: BTreeMap<String, Vec<String>>,
    /// File extension (without dot) → mode overrides.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
    /// Directory relative table paths are resolved against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Default for IncludemeConfig {
    fn default() -> Self {
        let mut modes = BTreeMap::new();
        modes.insert("c".to_string(), vec!["builtin:c".to_string()]);
        modes.insert("cpp".to_string(), vec!["builtin:cpp".to_string()]);
        IncludemeConfig {
            modes,
            extensions: BTreeMap::new(),
            base_dir: None,
        }
    }
}

impl IncludemeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: IncludemeConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        info!("Loaded config: {}", path.display());
        Ok(config)
    }

    /// Use `explicit` if given, else `includeme.toml` in `dir` if present,
    /// else the builtin defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        debug!("No {} found, using builtin tables", CONFIG_FILE);
        Ok(Self::default())
    }

    /// Registered tables for `mode`, or `None` when the mode has none.
    pub fn tables_for(&self, mode: &Mode) -> Option<Vec<TableSource>> {
        let ids = self.modes.get(mode.as_str())?;
        if ids.is_empty() {
            return None;
        }
        Some(
            ids.iter()
                .map(|id| TableSource::parse(id, self.base_dir.as_deref()))
                .collect(),
        )
    }

    /// All configured modes, sorted.
    pub fn modes(&self) -> impl Iterator<Item = Mode> + '_ {
        self.modes.keys().map(|name| Mode::new(name.as_str()))
    }

    /// Detect mode from a file's extension.
    pub fn mode_for_path(&self, path: &Path) -> Option<Mode> {
        let ext = path.extension()?.to_str()?;
        if let Some(mode) = self.extensions.get(ext) {
            return Some(Mode::new(mode.as_str()));
        }
        DEFAULT_EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, mode)| Mode::from(*mode))
    }
}
