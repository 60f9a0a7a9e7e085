//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd, &output) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }
}

/// Find a config file in the directory tree, starting at `start`.
///
/// Files that fail to load are reported and skipped.
pub fn find_config(start: &Path, output: &Output) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match CliConfig::load(config_path.to_str()?) {
                    Ok(config) => return Some((config, config_path)),
                    Err(e) => output.warn(&format!("Ignoring config: {:#}", e)),
                }
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("shopfront.toml"),
            "[source]\nbase_url = \"http://catalog.internal\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = find_config(&nested, &quiet()).unwrap();
        assert_eq!(config.source.base_url, "http://catalog.internal");
        assert_eq!(path, dir.path().join("shopfront.toml"));
    }

    #[test]
    fn test_hidden_config_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".shopfront.toml"), "[source]\nlimit = 5\n").unwrap();

        let (config, _) = find_config(dir.path(), &quiet()).unwrap();
        assert_eq!(config.source.limit, 5);
    }

    #[test]
    fn test_broken_config_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shopfront.toml"), "[source]
limit = 8
").unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("shopfront.toml"), "[source
limit = ").unwrap();

        let (config, path) = find_config(&nested, &quiet()).unwrap();
        assert_eq!(config.source.limit, 8);
        assert_eq!(path, dir.path().join("shopfront.toml"));
    }
}
