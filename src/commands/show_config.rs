//! Config command - print the effective configuration

use std::path::Path;

use todos::config::ServerConfig;

const REDACTED: &str = "<redacted>";

/// Print the configuration that `serve` would use, secret masked
pub fn show_config(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let mut config = ServerConfig::load(config_path)?;
    config.validate()?;
    config.token.secret = REDACTED.to_string();

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
