//! Shared argument types for the build/encode subcommands.

use clap::{Args, ValueEnum};
use qurl_core::url_model::{QueryOrder, VariableMap};

/// A `--var NAME[=VALUE]` argument. `NAME` alone means "no value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarArg {
    pub name: String,
    pub value: Option<String>,
}

/// clap value parser for [`VarArg`].
pub fn parse_var(raw: &str) -> Result<VarArg, String> {
    let (name, value) = match raw.split_once('=') {
        Some((n, v)) => (n, Some(v.to_string())),
        None => (raw, None),
    };
    if name.is_empty() {
        return Err(format!("variable name must not be empty in {:?}", raw));
    }
    Ok(VarArg {
        name: name.to_string(),
        value,
    })
}

/// CLI spelling of [`QueryOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    NewestFirst,
    Insertion,
    Sorted,
}

impl From<OrderArg> for QueryOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::NewestFirst => QueryOrder::NewestFirst,
            OrderArg::Insertion => QueryOrder::Insertion,
            OrderArg::Sorted => QueryOrder::Sorted,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct VarArgs {
    /// Query variable as NAME=VALUE, or NAME for a bare flag. Repeatable.
    #[arg(long = "var", value_name = "NAME[=VALUE]", value_parser = parse_var)]
    pub vars: Vec<VarArg>,

    /// Order of variables in the query string (overrides config).
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,
}

impl VarArgs {
    /// Collect into a map; the `--order` flag wins over `fallback`.
    pub fn to_map(&self, fallback: QueryOrder) -> VariableMap {
        let order = self.order.map(QueryOrder::from).unwrap_or(fallback);
        let mut map = VariableMap::with_order(order);
        map.extend(self.vars.iter().map(|v| (v.name.clone(), v.value.clone())));
        map
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// URL scheme, e.g. http or https (empty uses the configured default).
    #[arg(long, default_value = "")]
    pub protocol: String,

    /// Host name (empty uses the configured default).
    #[arg(long, default_value = "")]
    pub host: String,

    /// Port; omitted from the URL when it is the scheme default.
    #[arg(long)]
    pub port: Option<u16>,

    /// Path, e.g. /index.html.
    #[arg(long, default_value = "")]
    pub path: String,
}
