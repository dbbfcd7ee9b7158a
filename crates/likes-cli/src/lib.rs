//! # Likes CLI
//!
//! Command-line interface for the Free Fire Likes API.
//! This crate provides the CLI structure, argument parsing, and command routing.

pub mod commands;
pub mod config;
pub mod display;
pub mod logging;

// Re-export common types
pub use config::{Config, Overrides};
pub use logging::init_logging;

use clap::{Parser, Subcommand};
use thiserror::Error;

/// Application-level errors for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] likes_api::ApiError),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Main CLI struct
#[derive(Parser, Debug)]
#[command(name = "ff-likes")]
#[command(about = "Client for the Free Fire Likes API")]
#[command(version)]
pub struct Cli {
    /// Base URL of the API (default: http://localhost:3000/api)
    #[arg(long, global = true, env = "FF_LIKES_API_URL")]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through every endpoint: health, key generation, send likes, token retrieval
    Demo(commands::demo::DemoArgs),
    /// Check API status
    Health,
    /// Generate a new API key
    GenerateKey,
    /// Send likes to a player
    SendLikes(commands::send_likes::SendLikesArgs),
    /// Retrieve the saved access token
    GetToken(commands::get_token::GetTokenArgs),
    /// Show the effective configuration
    Config,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let api_key = match &self.command {
            Some(Commands::SendLikes(args)) => args.auth.api_key.clone(),
            Some(Commands::GetToken(args)) => args.auth.api_key.clone(),
            _ => None,
        };

        Overrides {
            base_url: self.base_url.clone(),
            api_key,
        }
    }
}

/// Main CLI runner. Without a subcommand the demo runs with its defaults.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.overrides())?;

    match cli.command {
        None => commands::demo::handle(commands::demo::DemoArgs::default(), &config).await,
        Some(Commands::Demo(args)) => commands::demo::handle(args, &config).await,
        Some(Commands::Health) => commands::health::handle(&config).await,
        Some(Commands::GenerateKey) => commands::generate_key::handle(&config).await,
        Some(Commands::SendLikes(args)) => commands::send_likes::handle(args, &config).await,
        Some(Commands::GetToken(_)) => commands::get_token::handle(&config).await,
        Some(Commands::Config) => commands::config::handle(&config),
    }
}
