//! URL assembly from protocol, host, port, path and variables.

use url::Url;

use super::error::UrlError;
use super::query::encode_query_string;
use super::variables::VariableMap;

/// Scheme used when the caller passes an empty protocol.
pub const DEFAULT_SCHEME: &str = "http";

/// Host used when the caller passes an empty host.
pub const DEFAULT_HOST: &str = "localhost";

/// Discrete URL components, borrowed from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParts<'a> {
    pub protocol: &'a str,
    pub host: &'a str,
    /// `None` uses the scheme's default port.
    pub port: Option<u16>,
    pub path: &'a str,
}

/// Substitutions applied to empty components before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub default_scheme: String,
    pub default_host: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            default_host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Well-known default port for `scheme` (case-insensitive).
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme.to_ascii_lowercase().as_str() {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}

/// Builds a URL with the built-in defaults (`http`, `localhost`).
///
/// # Examples
///
/// - `build_url("https", "example.com", Some(443), "/index.html", None)` → `https://example.com/index.html`
/// - `build_url("http", "example.com", Some(8080), "", None)` → `http://example.com:8080/`
pub fn build_url(
    protocol: &str,
    host: &str,
    port: Option<u16>,
    path: &str,
    variables: Option<&VariableMap>,
) -> Result<Url, UrlError> {
    let parts = UrlParts {
        protocol,
        host,
        port,
        path,
    };
    build_url_with(&parts, variables, &BuildOptions::default())
}

/// Builds a URL, substituting `options` for an empty protocol or host.
///
/// The port is written only when it differs from the scheme default. A
/// non-empty path without a leading `/` gets one. The query suffix from
/// [`encode_query_string`] is appended when `variables` is non-empty.
pub fn build_url_with(
    parts: &UrlParts<'_>,
    variables: Option<&VariableMap>,
    options: &BuildOptions,
) -> Result<Url, UrlError> {
    let raw = assemble(parts, variables, options);
    match Url::parse(&raw) {
        Ok(url) => {
            tracing::debug!(url = %url, "built url");
            Ok(url)
        }
        Err(source) => {
            tracing::warn!(url = %raw, error = %source, "assembled url does not parse");
            Err(UrlError::Malformed { url: raw, source })
        }
    }
}

fn assemble(parts: &UrlParts<'_>, variables: Option<&VariableMap>, options: &BuildOptions) -> String {
    let scheme = non_empty_or(parts.protocol, &options.default_scheme);
    let host = non_empty_or(parts.host, &options.default_host);

    let mut out = String::with_capacity(scheme.len() + host.len() + parts.path.len() + 16);
    out.push_str(scheme);
    out.push_str("://");
    out.push_str(host);

    if let Some(port) = parts.port {
        if default_port(scheme) != Some(port) {
            out.push(':');
            out.push_str(&port.to_string());
        }
    }

    if !parts.path.is_empty() && !parts.path.starts_with('/') {
        out.push('/');
    }
    out.push_str(parts.path);
    out.push_str(&encode_query_string(variables));
    out
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
