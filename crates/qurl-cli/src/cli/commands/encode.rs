//! Encode command: render variables as a query-string suffix.

use anyhow::Result;
use qurl_core::config::QurlConfig;
use qurl_core::url_model::encode_query_string;

use crate::cli::args::VarArgs;

pub fn render_encode(vars: &VarArgs, cfg: &QurlConfig) -> String {
    let variables = vars.to_map(cfg.query_order);
    encode_query_string(Some(&variables))
}

/// Print the query suffix (an empty line when there are no variables).
pub fn run_encode(vars: &VarArgs, cfg: &QurlConfig) -> Result<()> {
    println!("{}", render_encode(vars, cfg));
    Ok(())
}
