use clap::Args;
use eyre::Result;
use sprocgen_codegen::Linter;

use super::args::{FilterArgs, GeneratorArgs, SourceArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    generator: GeneratorArgs,

    #[command(flatten)]
    filter: FilterArgs,
}

impl CheckCommand {
    /// Run the check command
    pub async fn run(&self) -> Result<()> {
        let config = self.source.load_config();
        let options = self.generator.options(&config.generator)?;
        let provider = self.source.schema_source(&config)?.open().await?;

        let result = ops::check(
            provider.as_ref(),
            &Linter::new(),
            &options,
            &self.filter.filter(),
        )
        .await;
        provider.close().await;
        let report = result?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
