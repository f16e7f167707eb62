use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::catalog::{ALL_CATEGORY, all_categories, all_tools};

/// Toolshelf - a catalog site of small developer utilities
///
/// Serves the catalog, exports it as static files, and talks to the Google
/// Indexing and Search Console APIs.
#[derive(Parser, Debug)]
#[command(name = "toolshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site config file (JSON)
    ///
    /// Example: --config toolshelf.json
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// List available tool categories and exit
    #[arg(long)]
    pub list_categories: bool,

    /// List available tool ids and exit
    #[arg(long)]
    pub list_tools: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the site over HTTP
    Serve {
        /// Listen address
        /// Can also be set via `TOOLSHELF_ADDR` environment variable
        #[arg(long, value_name = "ADDR", env = "TOOLSHELF_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },

    /// Export every page and asset as static files
    Build {
        /// Output directory, created if missing
        #[arg(long, value_name = "DIR", default_value = "dist")]
        out: PathBuf,
    },

    /// Filter the catalog from the terminal
    Search {
        /// Case-insensitive text matched against names and descriptions
        query: Option<String>,

        /// Category id, or `all`
        #[arg(long, default_value = ALL_CATEGORY)]
        category: String,
    },

    /// Notify the Google Indexing API that URLs were updated
    SubmitUrl {
        /// Absolute page URLs
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,

        #[command(flatten)]
        credentials: CredentialsArgs,
    },

    /// Show the last week of Search Console queries for the site
    CheckIndexing {
        #[command(flatten)]
        credentials: CredentialsArgs,
    },
}

#[derive(Args, Debug)]
pub struct CredentialsArgs {
    /// Service-account JSON key file
    /// Can also be set via `TOOLSHELF_CREDENTIALS` environment variable
    #[arg(
        long,
        value_name = "PATH",
        env = "TOOLSHELF_CREDENTIALS",
        default_value = "service-account.json"
    )]
    pub credentials: PathBuf,
}

/// Get all category ids, in display order
pub fn available_categories() -> Vec<&'static str> {
    all_categories().iter().map(|category| category.id).collect()
}

/// Get all tool ids, in registry order
pub fn available_tools() -> Vec<&'static str> {
    all_tools().iter().map(|tool| tool.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_submit_url_with_credentials() {
        let cli = Cli::try_parse_from([
            "toolshelf",
            "submit-url",
            "https://toolshelf.dev/",
            "https://toolshelf.dev/tools/base64",
            "--credentials",
            "key.json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::SubmitUrl { urls, credentials }) => {
                assert_eq!(urls.len(), 2);
                assert_eq!(credentials.credentials, PathBuf::from("key.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn submit_url_needs_a_url() {
        assert!(Cli::try_parse_from(["toolshelf", "submit-url"]).is_err());
    }

    #[test]
    fn search_defaults_to_all_categories() {
        let cli = Cli::try_parse_from(["toolshelf", "search", "json"]).unwrap();
        match cli.command {
            Some(Commands::Search { query, category }) => {
                assert_eq!(query.as_deref(), Some("json"));
                assert_eq!(category, "all");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn lists_follow_the_registry() {
        assert_eq!(available_categories()[0], "all");
        assert_eq!(available_tools().len(), all_tools().len());
    }
}
