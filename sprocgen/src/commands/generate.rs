use std::{path::PathBuf, sync::Arc};

use clap::{Args, builder::RangedU64ValueParser};
use eyre::{Result, bail};
use sprocgen_codegen::ScriptGenerator;
use sprocgen_config::OutputConfig;
use sprocgen_core::{OutputFile, Overwrite};
use sprocgen_schema::SchemaProvider;
use tokio::io::BufWriter;
use tracing::info;

use super::args::{FilterArgs, GeneratorArgs, SourceArgs};
use crate::{
    ops::{self, GenerateOptions},
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    generator: GeneratorArgs,

    #[command(flatten)]
    filter: FilterArgs,

    /// Output script (overrides [output] path, defaults to result.sql)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the script to stdout without writing a file
    #[arg(long)]
    dry_run: bool,

    /// Number of tables processed at once
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    concurrency: Option<usize>,

    /// Skip tables whose columns can't be read instead of aborting
    #[arg(long)]
    keep_going: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let config = self.source.load_config();
        let options = self.generator.options(&config.generator)?;
        let source = self.source.schema_source(&config)?;
        let opts = GenerateOptions {
            concurrency: self.concurrency.unwrap_or(config.generator.concurrency),
            keep_going: self.keep_going || config.generator.keep_going,
            filter: self.filter.filter(),
        };

        info!("generation started");
        let provider = source.open().await?;
        let generator = ScriptGenerator::new(options);
        let result = self
            .write(Arc::clone(&provider), generator, &opts, &config.output)
            .await;
        provider.close().await;
        let report = result?;
        info!("generation completed");

        if !report.is_complete() {
            bail!(
                "{} of {} tables could not be read",
                report.failed.len(),
                report.failed.len() + report.tables.len()
            );
        }
        Ok(())
    }

    /// Generate into stdout or the output file and render the summary.
    async fn write(
        &self,
        provider: Arc<dyn SchemaProvider>,
        generator: ScriptGenerator,
        opts: &GenerateOptions,
        output: &OutputConfig,
    ) -> Result<GenerateReport> {
        if self.dry_run {
            let mut stdout = tokio::io::stdout();
            let report = ops::generate(provider, generator, opts, &mut stdout).await?;
            report.render(&mut TerminalOutput::stderr());
            return Ok(report);
        }

        let path = self.output.clone().unwrap_or_else(|| output.path.clone());
        let file = OutputFile::new(&path).with_overwrite(Overwrite::from_flag(output.overwrite));
        let Some(file) = file.create()? else {
            bail!(
                "{} already exists; set `overwrite = true` under [output] to replace it",
                path.display()
            );
        };

        let mut sink = BufWriter::new(tokio::fs::File::from_std(file));
        let mut report = ops::generate(provider, generator, opts, &mut sink).await?;
        report.output = Some(path);
        report.render(&mut TerminalOutput::new());
        Ok(report)
    }
}
