//! Query-string encoding and decoding (application/x-www-form-urlencoded).

use url::form_urlencoded;

use super::variables::VariableMap;

/// Renders `variables` as a query suffix such as `?b=2&a=1`.
///
/// Entries follow the map's [`QueryOrder`](super::QueryOrder). A variable with
/// no value or an empty value is emitted as the bare name. Names and values are
/// form-encoded: alphanumerics and `*-._` pass through, space becomes `+`, and
/// every other byte is `%XX`.
///
/// Returns an empty string when `variables` is `None` or empty.
pub fn encode_query_string(variables: Option<&VariableMap>) -> String {
    let variables = match variables {
        Some(v) if !v.is_empty() => v,
        _ => return String::new(),
    };

    let mut out = String::from("?");
    for (i, (name, value)) in variables.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.extend(form_urlencoded::byte_serialize(name.as_bytes()));
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            out.push('=');
            out.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        }
    }
    out
}

/// Parses a query string back into name/value pairs, in input order.
///
/// A leading `?` is optional. A segment without `=` yields a `None` value;
/// `name=` yields `Some("")`. Invalid UTF-8 after percent-decoding is replaced
/// lossily.
pub fn decode_query_string(query: &str) -> Vec<(String, Option<String>)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let has_value = segment.contains('=');
            let (name, value) = form_urlencoded::parse(segment.as_bytes()).next()?;
            Some((name.into_owned(), has_value.then(|| value.into_owned())))
        })
        .collect()
}
