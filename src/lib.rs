pub mod commands;
pub mod config;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "promu",
    about = "Report metadata about the current project",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        CLI::command().debug_assert();
    }

    #[test]
    fn test_parse_info() {
        let cli = CLI::try_parse_from(["promu", "info"]).unwrap();

        assert!(matches!(cli.commands, Commands::Info(_)));
        assert!(!cli.verbose);

        let cli = CLI::try_parse_from(["promu", "-v", "info"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_info_takes_no_flags() {
        assert!(CLI::try_parse_from(["promu", "info", "--json"]).is_err());
    }
}
