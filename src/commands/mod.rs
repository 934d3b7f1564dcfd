pub mod completions;
pub mod info;

use anyhow::Result;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Info(info::Options),
    Completions(completions::Options),
}

pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Info(options) => info::handle(options).await,

        Commands::Completions(options) => {
            completions::handle(options);
            Ok(())
        }
    }
}
