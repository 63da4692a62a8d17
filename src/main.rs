mod cli;
mod client;
mod commands;
mod config;
mod error;
mod logging;
mod orchestrator;
mod output;
mod page;
mod render;
mod types;
mod view;

#[cfg(test)]
mod test_support;

use std::io;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::UsersClient;
use config::Config;
use error::{Result, UserDeckError};
use orchestrator::Orchestrator;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        // The surface has already shown why the data is unavailable.
        if !matches!(e, UserDeckError::Unavailable) {
            eprintln!("Error: {e}");
        }

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    let default_log = match cli.command {
        Commands::Serve(_) => "info",
        _ => "off",
    };
    logging::init(default_log, cli.verbose);

    match cli.command {
        // Commands that don't need the users endpoint
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdeck", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        command => {
            let config = Config::load()?;
            let endpoint = config.endpoint(cli.endpoint.as_deref())?;
            let client = Arc::new(UsersClient::new(endpoint, config.timeout(cli.timeout))?);

            match command {
                Commands::List => {
                    commands::list::list(&Orchestrator::new(client)).await?;
                }
                Commands::Page(args) => {
                    commands::page::render(&Orchestrator::new(client), args).await?;
                }
                Commands::Serve(args) => {
                    let addr = config.bind(args.bind.as_deref())?;
                    commands::serve::serve(client, addr).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
