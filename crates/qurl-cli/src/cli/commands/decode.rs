//! Decode command: split a query string into one variable per line.

use anyhow::Result;
use qurl_core::url_model::decode_query_string;

/// One `name=value` (or bare `name`) per pair, decoded.
pub fn render_decode(query: &str) -> Vec<String> {
    // Accept a full URL as well as a bare query.
    let query = query.split_once('?').map_or(query, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);
    decode_query_string(query)
        .into_iter()
        .map(|(name, value)| match value {
            Some(v) => format!("{}={}", name, v),
            None => name,
        })
        .collect()
}

pub fn run_decode(query: &str) -> Result<()> {
    for line in render_decode(query) {
        println!("{}", line);
    }
    Ok(())
}
