use anyhow::Result;
use clap::{CommandFactory, Parser};

mod catalog;
mod cli;
mod commands;
mod config;
mod embedded;
mod i18n;
mod indexing;
mod runner;
mod site;

use cli::{Cli, Commands};
use config::SiteConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging, `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle list-categories flag
    if cli.list_categories {
        println!("Available tool categories:");
        for category in cli::available_categories() {
            println!("  - {category}");
        }
        return Ok(());
    }

    // Handle list-tools flag
    if cli.list_tools {
        println!("Available tools:");
        for tool in cli::available_tools() {
            println!("  - {tool}");
        }
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = SiteConfig::load(cli.config.as_deref())?;

    match command {
        Commands::Serve { addr } => commands::handle_serve(config, addr).await,
        Commands::Build { out } => commands::handle_build(config, &out),
        Commands::Search { query, category } => {
            commands::handle_search(query.as_deref().unwrap_or_default(), &category)
        }
        Commands::SubmitUrl { urls, credentials } => {
            commands::handle_submit_url(&urls, &credentials.credentials).await
        }
        Commands::CheckIndexing { credentials } => {
            commands::handle_check_indexing(&config, &credentials.credentials).await
        }
    }
}
