//! Layered configuration from `.env` files and the process environment.
//!
//! ## Configuration Hierarchy
//!
//! Lowest to highest priority:
//!
//! 1. **Broad**: `<skill_dir>/../../.env`
//! 2. **Mid**: `<skill_dir>/../.env`
//! 3. **Narrow**: `<skill_dir>/.env`
//! 4. **Process environment**
//!
//! Later layers overwrite keys from earlier ones. Files that are missing or
//! unreadable are skipped, as are lines that do not parse.
//!
//! ## Recognized Keys
//!
//! - `DEBUG`: `"true"` (any case) enables debug logging
//! - `CONTEXT7_API_KEY`: bearer token for the documentation host; empty means
//!   no `Authorization` header
//!
//! ```rust
//! use docseek_core::config::{EnvMap, Settings, merge_sources};
//!
//! let file: EnvMap = [("DEBUG".to_string(), "false".to_string())].into();
//! let process: EnvMap = [("DEBUG".to_string(), "TRUE".to_string())].into();
//!
//! let merged = merge_sources([&file, &process]);
//! assert!(Settings::from_map(&merged).debug);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result};

/// Key toggling debug logging.
pub const DEBUG_KEY: &str = "DEBUG";

/// Key holding the documentation host bearer token.
pub const API_KEY_KEY: &str = "CONTEXT7_API_KEY";

/// Filename of every file layer.
pub const ENV_FILENAME: &str = ".env";

/// Flat key-value configuration source.
pub type EnvMap = BTreeMap<String, String>;

/// Where a layer comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Two levels above the skill directory.
    Broad,
    /// Directly above the skill directory.
    Mid,
    /// The skill directory itself.
    Narrow,
    /// Process environment.
    Process,
}

/// One configuration source.
#[derive(Debug, Clone, Serialize)]
pub struct EnvLayer {
    /// Scope of the layer.
    pub scope: Scope,
    /// File the layer was read from; `None` for the process environment.
    pub path: Option<PathBuf>,
    /// Whether the file existed and was read.
    pub loaded: bool,
    /// Parsed values.
    #[serde(skip)]
    pub values: EnvMap,
}

/// Fold sources left to right; later sources win.
#[must_use]
pub fn merge_sources<'a, I>(sources: I) -> EnvMap
where
    I: IntoIterator<Item = &'a EnvMap>,
{
    sources.into_iter().fold(EnvMap::new(), |mut merged, source| {
        merged.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    })
}

/// Pick the skill directory layers are discovered from.
///
/// An explicit path must name an existing directory; without one the
/// current working directory is used.
pub fn resolve_skill_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(Error::Config(format!(
            "Skill directory '{}' does not exist",
            dir.display()
        ))),
        None => Ok(std::env::current_dir()?),
    }
}

/// `.env` file locations for a skill directory, broadest first.
#[must_use]
pub fn layer_paths(skill_dir: &Path) -> Vec<(Scope, PathBuf)> {
    let base = std::fs::canonicalize(skill_dir).unwrap_or_else(|_| skill_dir.to_path_buf());

    [Scope::Narrow, Scope::Mid, Scope::Broad]
        .into_iter()
        .zip(base.ancestors())
        .map(|(scope, dir)| (scope, dir.join(ENV_FILENAME)))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Parse one `.env` file.
///
/// Returns `None` when the file is missing or cannot be opened. Lines that
/// fail to parse are skipped; a read error stops parsing but keeps what was
/// read so far.
#[must_use]
pub fn read_env_file(path: &Path) -> Option<EnvMap> {
    if !path.is_file() {
        return None;
    }

    // The non-deprecated dotenv API writes into the process environment.
    #[allow(deprecated)]
    let iter = match dotenv::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Skipping unreadable env file");
            return None;
        },
    };

    let mut values = EnvMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                values.insert(key, value);
            },
            Err(dotenv::Error::Io(err)) => {
                debug!(path = %path.display(), error = %err, "Stopped reading env file");
                break;
            },
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Skipping malformed env line");
            },
        }
    }
    Some(values)
}

/// Snapshot of the process environment, skipping non-UTF-8 entries.
#[must_use]
pub fn process_env() -> EnvMap {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// All configuration layers plus their merged view.
#[derive(Debug, Clone)]
pub struct LayeredEnv {
    layers: Vec<EnvLayer>,
    merged: EnvMap,
}

impl LayeredEnv {
    /// Read the file layers for `skill_dir` and the current process environment.
    #[must_use]
    pub fn discover(skill_dir: &Path) -> Self {
        Self::discover_with(skill_dir, process_env())
    }

    /// Read the file layers for `skill_dir`, using `process` as the top layer.
    #[must_use]
    pub fn discover_with(skill_dir: &Path, process: EnvMap) -> Self {
        let mut layers: Vec<EnvLayer> = layer_paths(skill_dir)
            .into_iter()
            .map(|(scope, path)| {
                let values = read_env_file(&path);
                EnvLayer {
                    scope,
                    loaded: values.is_some(),
                    values: values.unwrap_or_default(),
                    path: Some(path),
                }
            })
            .collect();

        layers.push(EnvLayer {
            scope: Scope::Process,
            path: None,
            loaded: true,
            values: process,
        });

        Self::from_layers(layers)
    }

    /// Build from explicit layers, lowest priority first.
    #[must_use]
    pub fn from_layers(layers: Vec<EnvLayer>) -> Self {
        let merged = merge_sources(layers.iter().map(|layer| &layer.values));
        Self { layers, merged }
    }

    /// Merged value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.merged.get(key).map(String::as_str)
    }

    /// Layers in priority order, lowest first.
    #[must_use]
    pub fn layers(&self) -> &[EnvLayer] {
        &self.layers
    }

    /// The recognized settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::from_map(&self.merged)
    }
}

/// Settings the lookup pipeline reads. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Debug logging requested.
    pub debug: bool,
    /// Bearer token for the documentation host.
    pub api_key: Option<String>,
}

impl Settings {
    /// Extract recognized keys from a merged map.
    #[must_use]
    pub fn from_map(map: &EnvMap) -> Self {
        let debug = map
            .get(DEBUG_KEY)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));
        let api_key = map.get(API_KEY_KEY).filter(|v| !v.is_empty()).cloned();

        Self { debug, api_key }
    }

    /// Convenience for [`LayeredEnv::discover`] followed by [`LayeredEnv::settings`].
    #[must_use]
    pub fn load(skill_dir: &Path) -> Self {
        LayeredEnv::discover(skill_dir).settings()
    }
}
