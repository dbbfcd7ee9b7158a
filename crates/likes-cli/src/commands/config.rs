use crate::{config::Config, Result};

/// Handles the `config` command: prints the effective configuration.
pub fn handle(config: &Config) -> Result<()> {
    println!("# {}", config.config_path.display());
    print!("{}", config.show_config());
    Ok(())
}
