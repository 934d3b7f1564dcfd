mod parse;
pub mod types;
pub mod util;

use anyhow::Result;
use clap::Parser;

use self::types::Environment;
use self::util::resolve;
use crate::utils::git::GitCli;

#[derive(Debug, Parser)]
#[clap(about = "Print info about current project and exit")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options) -> Result<()> {
    let env = Environment::from_process()?;

    let git = GitCli::new(Some(env.cwd.clone()));

    let info = resolve(&git, &env).await?;

    println!("{info}");

    Ok(())
}
