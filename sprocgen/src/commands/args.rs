//! Flags shared by several commands.

use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use sprocgen_codegen::GeneratorOptions;
use sprocgen_config::{Config, ConfigFile, GeneratorConfig, validate_param_prefix};

use super::UnwrapOrExit;
use crate::{ops::TableFilter, source::SchemaSource};

const DEFAULT_CONFIG: &str = "sprocgen.toml";

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to sprocgen.toml (defaults to ./sprocgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// MySQL connection string (overrides [database] in sprocgen.toml)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Read tables from a TOML schema file instead of a database
    #[arg(long, conflicts_with = "database_url")]
    pub schema_file: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the config file, exiting with a diagnostic when it is invalid.
    pub fn load_config(&self) -> Config {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path, true),
            None => ConfigFile::load(DEFAULT_CONFIG, false),
        };
        file.unwrap_or_exit().into_config()
    }

    pub fn schema_source(&self, config: &Config) -> Result<SchemaSource> {
        SchemaSource::resolve(
            self.schema_file.as_ref(),
            self.database_url.as_deref(),
            &config.database,
        )
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// Prefix turning a column name into a parameter name
    #[arg(long)]
    pub param_prefix: Option<String>,

    /// Marker written before parameter references in procedure bodies
    #[arg(long)]
    pub bind_marker: Option<String>,
}

impl GeneratorArgs {
    /// Generator options from `[generator]`, with flags taking precedence.
    pub fn options(&self, config: &GeneratorConfig) -> Result<GeneratorOptions> {
        let prefix = self
            .param_prefix
            .clone()
            .unwrap_or_else(|| config.param_prefix.clone());
        validate_param_prefix(&prefix).map_err(|message| eyre!("--param-prefix: {message}"))?;

        let marker = self
            .bind_marker
            .clone()
            .unwrap_or_else(|| config.bind_marker.clone());

        Ok(GeneratorOptions::default()
            .with_param_prefix(prefix)
            .with_bind_marker(marker))
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only process this table (repeatable)
    #[arg(short, long = "table", value_name = "NAME")]
    pub tables: Vec<String>,

    /// Skip this table (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub exclude: Vec<String>,
}

impl FilterArgs {
    pub fn filter(&self) -> TableFilter {
        TableFilter::new(self.tables.clone(), self.exclude.clone())
    }
}
