pub mod config;
pub mod demo;
pub mod generate_key;
pub mod get_token;
pub mod health;
pub mod send_likes;

use clap::Args;

/// Credential for commands that call authenticated endpoints
#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// API key issued by `generate-key`
    #[arg(long, env = "FF_LIKES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
