//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, format } => {
            let name = format!("shopfront.{}", format);
            let path = ctx.cwd.join(name);
            init_config(&path, force)?;
            ctx.output.success(&format!("Created: {}", path.display()));
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.line("");
    ctx.output.line("[source]");
    ctx.output.kv("base_url", &ctx.config.source.base_url);
    ctx.output.kv("limit", &ctx.config.source.limit.to_string());
    if let Some(file) = &ctx.config.source.file {
        ctx.output.kv("file", file);
    }

    ctx.output.line("");
    ctx.output.line("[display]");
    ctx.output.kv("currency_symbol", &ctx.config.display.currency_symbol);
    ctx.output.kv("date_format", &ctx.config.display.date_format);

    Ok(())
}

/// Write a default config to `path`; JSON when the extension says so.
fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    let path_str = path.to_string_lossy();
    if path_str.ends_with(".json") {
        CliConfig::default().save(&path_str)
    } else {
        fs::write(path, generate_default_config())
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
