// Clippy project config
#![warn(clippy::unwrap_used)]

use clap::{Parser, Subcommand};
use cli::handle_cli_command;
use config::Config;
use directories::ProjectDirs;
use error::Error;
pub use error::Result;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
mod collection;
mod config;
mod error;
mod notify;
mod screens;
#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
/// Administrative client for the storefront backend.
struct Arguments {
    /// Display and log additional debug information.
    #[arg(short, long, default_value_t = false)]
    debug: bool,
    /// Override the backend URL from the config file.
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List a page of products.
    Products {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Restrict the listing to one category id.
        #[arg(short, long)]
        category: Option<String>,
        /// Sort by a column: name, price or old-price.
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Search products by name.
    Search {
        query: String,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Delete one product by id.
    DeleteProduct { id: String },
    /// Delete several products in a single request.
    BulkDeleteProducts { ids: Vec<String> },
    /// List a page of categories.
    Categories {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    CreateCategory { name: String },
    DeleteCategory { id: String },
    /// List registered customers.
    Users {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// List orders, optionally for a single customer.
    Orders {
        #[arg(short, long)]
        user: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
}

pub struct RuntimeInfo {
    config: Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Using try block to print error using Display instead of Debug.
    if let Err(e) = try_main().await {
        println!("{e}");
        return ExitCode::FAILURE;
    };
    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    let Arguments {
        debug,
        api_url,
        command,
    } = args;
    init_tracing(debug);
    let mut config = Config::new()?;
    // Command line flag for the backend URL should override config.
    if let Some(api_url) = api_url {
        config.api_url = api_url;
    }
    let rt = RuntimeInfo { config };
    match command {
        None => println!("No command provided"),
        Some(command) => handle_cli_command(command, rt).await?,
    };
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_directive = if debug {
        "backoffice=debug"
    } else {
        "backoffice=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn get_config_dir() -> Result<PathBuf> {
    let directory = if let Ok(s) = std::env::var("BACKOFFICE_CONFIG_DIR") {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "storefront", "backoffice") {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        return Err(Error::DirectoryName);
    };
    Ok(directory)
}
