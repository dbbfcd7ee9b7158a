use crate::{config::Config, display, Result};
use likes_api::LikesApiClient;

/// Handles the `generate-key` command.
///
/// The key is printed, not stored. Pass it back with `--api-key` or
/// `FF_LIKES_API_KEY` on later invocations.
pub async fn handle(config: &Config) -> Result<()> {
    let mut client = LikesApiClient::new(config.base_url())?;

    let info = client.generate_api_key_info().await.map_err(|e| {
        display::print_error(&format!("Failed to generate API key: {}", e));
        e
    })?;

    display::print_success(&format!("API key generated: {}", info.api_key));
    if let Some(created_at) = info.created_at {
        println!("  Created: {}", created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(())
}
