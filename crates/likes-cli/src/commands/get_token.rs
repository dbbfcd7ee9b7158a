use super::AuthArgs;
use crate::{config::Config, display, Result};
use clap::Args;
use likes_api::LikesApiClient;

#[derive(Args, Debug, Clone, Default)]
pub struct GetTokenArgs {
    #[command(flatten)]
    pub auth: AuthArgs,
}

/// Handles the `get-token` command. The API key arrives through `config`.
pub async fn handle(config: &Config) -> Result<()> {
    let client = LikesApiClient::from_config(config)?;

    let token = client.get_token_info().await.map_err(|e| {
        display::print_error(&format!("Failed to retrieve token: {}", e));
        e
    })?;
    display::display_token(&token);

    Ok(())
}
