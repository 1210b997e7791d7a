use clitext::{app::App, commands::Cli, config::load_config, logging::init_logging};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Load configuration
    let config = load_config(&args.config)?;

    if args.config.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let Some(command) = args.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    init_logging(&config)?;

    let app = App::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(&command, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
