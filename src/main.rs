use anyhow::{Context, Result};
use clap::Parser;

use holocron::cli::handlers::{self, CommandContext};
use holocron::cli::{Cli, Commands};
use holocron::config::HolocronConfig;
use holocron::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => handlers::handle_init(),
        Commands::Serve { host, port } => {
            handlers::handle_serve(context(&cli)?, host.clone(), *port)
        }
        Commands::Query { query, variables } => {
            handlers::handle_query(context(&cli)?, query.clone(), variables.clone())
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(context(&cli)?, mutation.clone(), variables.clone()),
        Commands::Schema => handlers::handle_schema(context(&cli)?),
    }
}

fn context(cli: &Cli) -> Result<CommandContext> {
    let config = load_config(cli)?;
    logging::init(&config.logging);
    CommandContext::new(config)
}

/// Config file (explicit or discovered) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<HolocronConfig> {
    let mut config = match &cli.config {
        Some(path) => HolocronConfig::load(path),
        None => HolocronConfig::discover(&std::env::current_dir()?),
    }
    .context("Failed to load holocron configuration")?;

    if let Some(url) = &cli.database_url {
        config.database.url = url.clone();
    }
    if cli.verbose {
        config.logging.verbose = true;
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
    Ok(config)
}
