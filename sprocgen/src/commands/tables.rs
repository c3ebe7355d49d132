use clap::Args;
use eyre::Result;

use super::args::{FilterArgs, SourceArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TablesCommand {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filter: FilterArgs,
}

impl TablesCommand {
    pub async fn run(&self) -> Result<()> {
        let config = self.source.load_config();
        let provider = self.source.schema_source(&config)?.open().await?;

        let result = ops::tables(provider.as_ref(), &self.filter.filter()).await;
        provider.close().await;
        let report = result?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
