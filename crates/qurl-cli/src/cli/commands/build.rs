//! Build command: assemble a full URL from components and variables.

use anyhow::Result;
use qurl_core::config::QurlConfig;
use qurl_core::url_model::{build_url_with, UrlParts};

use crate::cli::args::{BuildArgs, VarArgs};

/// Assemble the URL described by `args`, filling gaps from `cfg`.
pub fn render_build(args: &BuildArgs, vars: &VarArgs, cfg: &QurlConfig) -> Result<String> {
    let variables = vars.to_map(cfg.query_order);
    let parts = UrlParts {
        protocol: &args.protocol,
        host: &args.host,
        port: args.port,
        path: &args.path,
    };
    let url = build_url_with(&parts, Some(&variables), &cfg.build_options())?;
    Ok(url.to_string())
}

/// Print the assembled URL.
pub fn run_build(args: &BuildArgs, vars: &VarArgs, cfg: &QurlConfig) -> Result<()> {
    let url = render_build(args, vars, cfg)?;
    tracing::info!(url = %url, "build");
    println!("{}", url);
    Ok(())
}
