//! Deterministic request-URL construction.
//!
//! `url_model` holds the pure builder and query-string codec; `config` and
//! `logging` are the ambient pieces used by the CLI.

pub mod config;
pub mod logging;
pub mod url_model;
