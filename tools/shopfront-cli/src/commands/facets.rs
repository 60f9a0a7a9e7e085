//! List facet values and price buckets.

use anyhow::Result;
use serde::Serialize;
use shopfront_catalog::prelude::*;

use super::{load_session, FacetsArgs};
use crate::context::Context;
use crate::render::render_facets;

#[derive(Serialize)]
struct FacetsReport<'a> {
    facets: &'a CatalogFacets,
    price_buckets: Vec<PriceBucket>,
    products: usize,
}

/// Run the facets command.
pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let session = load_session(&args.source, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&FacetsReport {
            facets: session.facets(),
            price_buckets: session.price_buckets(),
            products: session.catalog().len(),
        });
        return Ok(());
    }

    ctx.output
        .header(&format!("{} products", session.catalog().len()));
    for line in render_facets(session.facets(), &session.price_buckets()) {
        ctx.output.line(&line);
    }

    Ok(())
}
