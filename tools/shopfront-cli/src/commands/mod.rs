//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod facets;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use shopfront_catalog::prelude::*;
use shopfront_loader::CatalogLoader;

use crate::context::Context;

/// Where to load the catalog from. Overrides `[source]` in the config.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Catalog API base URL.
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the catalog from a local JSON file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Page size requested from the API.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl SourceArgs {
    /// Build the loader from flags, falling back to the config.
    pub fn loader(&self, ctx: &Context) -> CatalogLoader {
        let source = &ctx.config.source;
        let limit = self.limit.unwrap_or(source.limit);

        if let Some(url) = &self.url {
            return CatalogLoader::http(url.clone()).with_limit(limit);
        }
        if let Some(file) = &self.file {
            return CatalogLoader::file(file.clone());
        }
        match &source.file {
            Some(file) => CatalogLoader::file(resolve(ctx, file)),
            None => CatalogLoader::http(source.base_url.clone()).with_limit(limit),
        }
    }
}

/// Config-relative paths resolve against the config file's directory.
fn resolve(ctx: &Context, file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    ctx.config_path
        .as_deref()
        .and_then(|p| p.parent())
        .unwrap_or(&ctx.cwd)
        .join(path)
}

/// Load the catalog into a fresh session, failing on a load error.
pub async fn load_session(source: &SourceArgs, ctx: &Context) -> Result<BrowseSession> {
    let loader = source.loader(ctx);
    ctx.output
        .debug(&format!("Loading catalog from {}", loader.source().describe()));

    let spinner = ctx.output.spinner("Loading products...");
    let mut session = BrowseSession::new();
    loader.load_into(&mut session).await;
    spinner.finish_and_clear();

    if let Some(error) = session.error() {
        bail!("Failed to load catalog: {}", error);
    }
    Ok(session)
}

/// Arguments for the browse command.
#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Case-insensitive substring of the product name.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact brand name.
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Exact category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Price bucket: all, 0-50, 50-100, 100-200, 200+ (or its label).
    #[arg(long)]
    pub price: Option<PriceRange>,

    /// Sort order: price-asc, price-desc, newest.
    #[arg(long)]
    pub sort: Option<SortOption>,

    /// Page to show (1-based).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the facets command.
#[derive(Args, Debug, Default)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File format: toml or json.
        #[arg(long, default_value = "toml", value_parser = ["toml", "json"])]
        format: String,
    },
}
