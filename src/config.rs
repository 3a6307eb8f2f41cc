//! Configuration loaded from `sieve.toml`.
//!
//! Lookup order: an explicit path, `./sieve.toml`, then
//! `<config dir>/sieve/config.toml`. No file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClauseError, ClauseResult};
use crate::transpiler::{CompileOptions, DEFAULT_MAX_DEPTH};

const LOCAL_FILE: &str = "sieve.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compiler: CompilerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Deepest expression nesting accepted.
    pub max_depth: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize terminal output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Parse TOML text.
    pub fn from_toml(content: &str) -> ClauseResult<Self> {
        toml::from_str(content).map_err(|e| ClauseError::Config(e.to_string()))
    }

    /// Load from `path`, or from the first default location that exists.
    pub fn load(path: Option<&Path>) -> ClauseResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_locations().into_iter().find(|p| p.exists()) {
                Some(p) => p,
                None => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ClauseError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            max_depth: self.compiler.max_depth,
        }
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("sieve").join("config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.compile_options().max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.output.color);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml("[compiler]\nmax_depth = 12\n").unwrap();
        assert_eq!(config.compiler.max_depth, 12);
        assert!(config.output.color);
    }

    #[test]
    fn test_malformed() {
        let err = Config::from_toml("[compiler\n").unwrap_err();
        assert!(matches!(err, ClauseError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/sieve.toml"))).unwrap_err();
        assert!(matches!(err, ClauseError::Config(_)));
    }
}
