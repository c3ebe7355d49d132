use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// How to handle an existing output script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Truncate and replace
    #[default]
    Always,
    /// Only create the file if it doesn't exist
    IfMissing,
}

impl Overwrite {
    pub fn from_flag(overwrite: bool) -> Self {
        if overwrite {
            Self::Always
        } else {
            Self::IfMissing
        }
    }
}

/// The generated SQL script on disk
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    overwrite: Overwrite,
}

impl OutputFile {
    /// Create a new output file (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overwrite: Overwrite::default(),
        }
    }

    /// Set the overwrite rule
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Open the file for writing according to its rules.
    ///
    /// Missing parent directories are created. Returns `None` when the rules
    /// forbid touching an existing file.
    pub fn create(&self) -> Result<Option<fs::File>> {
        if self.overwrite == Overwrite::IfMissing && self.exists() {
            return Ok(None);
        }
        create_file(&self.path).map(Some)
    }
}

fn create_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("can't create directory {}", parent.display()))?;
    }
    fs::File::create(path).wrap_err_with(|| format!("can't open file: {}", path.display()))
}
