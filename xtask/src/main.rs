use anyhow::Result;
use clap::Parser;

mod cli;
mod tasks;

use cli::{Commands, XtaskCli};

fn main() -> Result<()> {
    let cli = XtaskCli::parse();

    match cli.command {
        Commands::Gallery(args) => tasks::gallery::run(args),
    }
}
