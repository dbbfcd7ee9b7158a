use crate::{config::Config, display, Result};
use clap::Args;
use likes_api::LikesApiClient;
use likes_core::HealthStatus;
use log::{debug, info};
use serde_json::Value;

pub const DEFAULT_UID: &str = "123456789";
pub const DEFAULT_REGION: &str = "BR";
pub const DEFAULT_ACCESS_TOKEN: &str = "your-token-here";

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Player UID to send likes to
    #[arg(long, default_value = DEFAULT_UID)]
    pub uid: String,

    /// Server region (BR, NA, SA, EU, AS, OC)
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Access token forwarded to the service
    #[arg(long, default_value = DEFAULT_ACCESS_TOKEN)]
    pub access_token: String,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            uid: DEFAULT_UID.to_string(),
            region: DEFAULT_REGION.to_string(),
            access_token: DEFAULT_ACCESS_TOKEN.to_string(),
        }
    }
}

/// What each step of the walkthrough produced
#[derive(Debug)]
pub struct DemoReport {
    pub health: HealthStatus,
    pub api_key: String,
    pub likes_response: Value,
    /// `None` when the service had no token to hand back
    pub token: Option<String>,
}

/// Handles the `demo` command (and a bare `ff-likes` invocation).
///
/// The session always starts without a key; step 2 generates one even when
/// `--api-key` or `FF_LIKES_API_KEY` is set.
pub async fn handle(args: DemoArgs, config: &Config) -> Result<()> {
    let mut client = LikesApiClient::new(config.base_url())?;
    run_demo(&mut client, &args).await?;
    Ok(())
}

/// Run the four steps in order. Only the token step may fail softly;
/// any other error aborts the walkthrough.
pub async fn run_demo(client: &mut LikesApiClient, args: &DemoArgs) -> Result<DemoReport> {
    debug!("Running demo against {}", client.base_url());
    display::print_banner("Free Fire Likes API example");
    println!();

    display::print_step(1, "Checking API status...");
    let health = client.check_health().await.map_err(|e| {
        display::print_error(&format!("Failed to check API status: {}", e));
        e
    })?;
    display::display_health(&health);
    println!();

    display::print_step(2, "Generating API key...");
    let api_key = client.generate_api_key().await.map_err(|e| {
        display::print_error(&format!("Failed to generate API key: {}", e));
        e
    })?;
    display::print_success(&format!("API key generated: {}", api_key));
    println!();

    display::print_step(3, "Sending likes...");
    let likes_response = client
        .send_likes(&args.uid, &args.region, &args.access_token)
        .await
        .map_err(|e| {
            display::print_error(&format!("Failed to send likes: {}", e));
            e
        })?;
    display::print_success("Likes sent successfully!");
    println!();

    display::print_step(4, "Retrieving saved token...");
    let token = match client.get_token().await {
        Ok(token) => {
            display::print_success(&format!("Token retrieved: {}", token));
            Some(token)
        }
        Err(e) if e.is_soft_failure() => {
            display::print_note(&e.to_string());
            None
        }
        Err(e) => {
            display::print_error(&format!("Failed to retrieve token: {}", e));
            return Err(e.into());
        }
    };
    println!();

    display::print_banner("Example finished!");
    info!("Demo completed");

    Ok(DemoReport {
        health,
        api_key,
        likes_response,
        token,
    })
}
