//! Command implementations

mod add;
mod config;
mod list;
mod reset;
mod show;

use crate::app::App;
use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(cli.config.as_deref(), cli.data_dir, cli.key)?;

    match cli.command {
        Commands::Add(args) => add::execute(args, &mut App::open(config, output)),
        Commands::List => list::execute(&App::open(config, output)),
        Commands::Show(args) => show::execute(args, &App::open(config, output)),
        Commands::Reset => reset::execute(&mut App::open(config, output)),
        Commands::Config => config::execute(&config, &output),
    }
}
