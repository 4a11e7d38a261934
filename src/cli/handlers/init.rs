use anyhow::Result;
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, HolocronConfig};

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    let config = HolocronConfig::default();
    config.save(&config_path)?;

    println!("{} {}", "Created".green(), config_path.display());
    println!("  Database: {}", config.database.url);
    println!(
        "  Endpoint: http://{}:{}{}",
        config.server.host,
        config.server.port,
        config.server.endpoint()
    );
    Ok(())
}
