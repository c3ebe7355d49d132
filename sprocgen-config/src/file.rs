use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Represents a sprocgen.toml file with both raw content and parsed config.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a sprocgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::parse(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path`, falling back to defaults when it doesn't exist and
    /// `required` is false.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self> {
        let path = path.as_ref();
        if !required && !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: Config::default(),
            });
        }
        Self::open(path)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when defaults were used).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take ownership of the parsed config.
    pub fn into_config(self) -> Config {
        self.config
    }
}
