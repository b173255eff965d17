//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config get`: Print one value
//! - `config set`: Persist one value

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(ctx: &AppContext, output_json: bool) -> Result<()> {
    let config = &ctx.config;
    let path = Config::config_path(&ctx.data_dir);

    let json_output = json!({
        "api_base_url": config.api_base_url,
        "signature": config.signature,
        "request_timeout_secs": config.request_timeout_secs,
        "config_file": path.to_string_lossy(),
    });

    let timeout = config
        .request_timeout_secs
        .map(|s| format!("{s}s"))
        .unwrap_or_else(|| "none".to_string());
    let footer = format!("Config file: {}", path.display());
    let text = format!(
        "{}\n\n{}: {}\n{}: {}\n{}: {}\n\n{}",
        "Configuration:".if_supports_color(Stream::Stdout, |t| t.cyan().bold().to_string()),
        "api_base_url".if_supports_color(Stream::Stdout, |t| t.cyan()),
        config.api_base_url,
        "signature".if_supports_color(Stream::Stdout, |t| t.cyan()),
        config.signature,
        "request_timeout_secs".if_supports_color(Stream::Stdout, |t| t.cyan()),
        timeout,
        footer.if_supports_color(Stream::Stdout, |t| t.dimmed()),
    );

    CommandOutput::new(json_output)
        .with_text(text)
        .print(output_json)
}

pub fn cmd_config_get(ctx: &AppContext, key: &str) -> Result<()> {
    println!("{}", ctx.config.get(key)?);
    Ok(())
}

/// Set a value in the config file.
///
/// Starts from the file on disk so a `--api-url` override is not persisted.
pub fn cmd_config_set(ctx: &AppContext, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load(&ctx.data_dir)?;
    config.set(key, value)?;
    config.save(&ctx.data_dir)?;
    println!(
        "Set {} = {}",
        key.if_supports_color(Stream::Stdout, |t| t.cyan()),
        config.get(key)?
    );
    Ok(())
}
