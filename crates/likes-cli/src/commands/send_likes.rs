use super::AuthArgs;
use crate::{config::Config, display, Result};
use clap::Args;
use likes_api::LikesApiClient;
use likes_core::{is_known_region, KNOWN_REGIONS};
use log::debug;

#[derive(Args, Debug, Clone)]
pub struct SendLikesArgs {
    /// Player UID
    #[arg(long)]
    pub uid: String,

    /// Server region (BR, NA, SA, EU, AS, OC)
    #[arg(long)]
    pub region: String,

    /// Access token forwarded to the service
    #[arg(long)]
    pub access_token: String,

    #[command(flatten)]
    pub auth: AuthArgs,
}

/// Handles the `send-likes` command. The API key arrives through `config`.
pub async fn handle(args: SendLikesArgs, config: &Config) -> Result<()> {
    let client = LikesApiClient::from_config(config)?;

    // The service validates regions; only point out a likely typo
    if !is_known_region(&args.region) {
        display::print_warning(&format!(
            "Region '{}' is not one of {}; sending anyway",
            args.region,
            KNOWN_REGIONS.join(", ")
        ));
    }

    debug!("Sending likes for uid {} in {}", args.uid, args.region);
    let response = client
        .send_likes(&args.uid, &args.region, &args.access_token)
        .await
        .map_err(|e| {
            display::print_error(&format!("Failed to send likes: {}", e));
            e
        })?;

    display::print_success("Likes sent successfully!");
    display::display_json(&response)?;

    Ok(())
}
