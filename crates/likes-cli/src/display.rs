use crate::Result;
use colored::Colorize;
use likes_core::{HealthStatus, TokenInfo};
use serde_json::Value;

/// Display the result of a health check
pub fn display_health(health: &HealthStatus) {
    print_success("API is up");
    println!("  {}: {}", "Status".bold(), health.status);
    println!("  {}: {} seconds", "Uptime".bold(), health.uptime);
    if let Some(timestamp) = &health.timestamp {
        println!("  {}: {}", "Timestamp".bold(), timestamp);
    }
}

/// Display a retrieved token and its expiry data
pub fn display_token(token: &TokenInfo) {
    print_success(&format!("Token retrieved: {}", token.access_token));

    if let Some(expires_at) = token.expires_at {
        println!(
            "  {}: {}",
            "Expires".bold(),
            expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    if let Some(last_used) = token.last_used {
        println!(
            "  {}: {}",
            "Last used".bold(),
            last_used.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
}

/// Pretty-print a raw response payload
pub fn display_json(payload: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

/// Numbered step header used by the demo walkthrough
pub fn print_step(number: usize, message: &str) {
    println!("{} {}", format!("{}.", number).bold(), message);
}

pub fn print_banner(message: &str) {
    println!("{}", format!("=== {} ===", message).bold().blue());
}

/// Status messages
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

pub fn print_note(message: &str) {
    println!("{} {}", "Note:".yellow().bold(), message);
}
