use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod command;
mod domain;
mod seed;
mod share;
mod shopping;
mod store;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Show) | None => command::run_show(cli.data_dir)?,
        Some(Commands::Shopping) => command::run_shopping(cli.data_dir)?,
        Some(Commands::Slot { action }) => command::run_slot(cli.data_dir, action)?,
        Some(Commands::Participants { names }) => {
            command::run_participants(cli.data_dir, names)?
        }
        Some(Commands::Trip { name, subtitle }) => {
            command::run_trip(cli.data_dir, name, subtitle)?
        }
        Some(Commands::Share { url }) => command::run_share(cli.data_dir, url)?,
        Some(Commands::Import { share }) => command::run_import(cli.data_dir, &share)?,
        Some(Commands::Reset { yes }) => command::run_reset(cli.data_dir, yes)?,
    }

    Ok(())
}
