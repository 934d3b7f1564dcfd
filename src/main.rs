#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use promu::commands::handle_command;
use promu::{utils, CLI};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    if let Err(error) = handle_command(cli.commands).await {
        log::error!("{error:#}");
        std::process::exit(1);
    }

    Ok(())
}
