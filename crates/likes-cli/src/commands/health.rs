use crate::{config::Config, display, Result};
use likes_api::LikesApiClient;

/// Handles the `health` command.
pub async fn handle(config: &Config) -> Result<()> {
    let client = LikesApiClient::from_config(config)?;

    let health = client.check_health().await.map_err(|e| {
        display::print_error(&format!("Failed to check API status: {}", e));
        e
    })?;
    display::display_health(&health);

    Ok(())
}
