//! Redactie - newsletter editing studio for the terminal

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Render(args) => commands::render::run(args),
        Command::Assist(args) => commands::assist::run(&cli.settings, args).await,
        Command::Tasks => commands::tasks::run(&cli.settings),
    }
}
