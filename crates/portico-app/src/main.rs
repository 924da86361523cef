//! Portico first-run page entry point.
//!
//! Decodes a launch query string, resolves the page view state, and
//! prints it as JSON on stdout for the rendering layer (or for a human
//! debugging a launch).
//!
//! Usage: `portico-app '<query-string>' [fallback-version]`

use anyhow::{Context, Result};

use portico_types::query::QueryParams;
use portico_welcome::{PageInput, resolve};

/// Version used when neither the query nor the caller supplies one.
const FALLBACK_VERSION: &str = "0.0.0";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let query = args
        .next()
        .context("usage: portico-app <query-string> [fallback-version]")?;
    let fallback = args.next().unwrap_or_else(|| FALLBACK_VERSION.to_string());

    let params = QueryParams::parse(&query);
    let input = PageInput::from_query(&params, &fallback);
    let view = resolve(&input);

    log::info!("resolved page variant {:?}: {}", view.variant, view.title);

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
