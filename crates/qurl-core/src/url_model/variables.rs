//! Named request variables with an explicit iteration order.

use serde::{Deserialize, Serialize};

use super::error::UrlError;

/// Order in which a [`VariableMap`] yields its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryOrder {
    /// Most recently inserted name first. Matches the ordering existing
    /// consumers of these query strings were built against.
    #[default]
    NewestFirst,
    /// Insertion order.
    Insertion,
    /// Ascending by name (byte-wise).
    Sorted,
}

/// Mapping from variable name to an optional value.
///
/// Re-inserting a name replaces its value but keeps the position it was first
/// inserted at. A value of `None` and `Some("")` render identically in a query
/// string (the bare name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, Option<String>)>,
    order: QueryOrder,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: QueryOrder) -> Self {
        Self {
            entries: Vec::new(),
            order,
        }
    }

    pub fn order(&self) -> QueryOrder {
        self.order
    }

    pub fn set_order(&mut self, order: QueryOrder) {
        self.order = order;
    }

    /// Inserts or replaces `name`. Returns the previous value slot if the name
    /// was already present.
    pub fn insert<N, V>(&mut self, name: N, value: V) -> Result<Option<Option<String>>, UrlError>
    where
        N: Into<String>,
        V: IntoVariableValue,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(UrlError::EmptyVariableName);
        }
        let value = value.into_variable_value();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Ok(Some(std::mem::replace(&mut slot.1, value)));
        }
        self.entries.push((name, value));
        Ok(None)
    }

    /// Value for `name`: `None` if the name is missing, `Some(None)` if it is
    /// present without a value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in this map's [`QueryOrder`].
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        let mut refs: Vec<(&str, Option<&str>)> = self
            .entries
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_deref()))
            .collect();
        match self.order {
            QueryOrder::NewestFirst => refs.reverse(),
            QueryOrder::Insertion => {}
            QueryOrder::Sorted => refs.sort_by(|a, b| a.0.cmp(b.0)),
        }
        refs.into_iter()
    }
}

/// Values accepted by [`VariableMap::insert`].
pub trait IntoVariableValue {
    fn into_variable_value(self) -> Option<String>;
}

impl IntoVariableValue for &str {
    fn into_variable_value(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoVariableValue for String {
    fn into_variable_value(self) -> Option<String> {
        Some(self)
    }
}

impl IntoVariableValue for &String {
    fn into_variable_value(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: IntoVariableValue> IntoVariableValue for Option<T> {
    fn into_variable_value(self) -> Option<String> {
        self.and_then(IntoVariableValue::into_variable_value)
    }
}

impl<N, V> Extend<(N, V)> for VariableMap
where
    N: Into<String>,
    V: IntoVariableValue,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            if let Err(e) = self.insert(name, value) {
                tracing::warn!("skipping variable: {}", e);
            }
        }
    }
}

impl<N, V> FromIterator<(N, V)> for VariableMap
where
    N: Into<String>,
    V: IntoVariableValue,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = VariableMap::new();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(map: &VariableMap) -> Vec<&str> {
        map.iter().map(|(n, _)| n).collect()
    }

    #[test]
    fn default_order_is_newest_first() {
        let map: VariableMap = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(map.order(), QueryOrder::NewestFirst);
        assert_eq!(names(&map), vec!["c", "b", "a"]);
    }

    #[test]
    fn insertion_and_sorted_orders() {
        let mut map = VariableMap::with_order(QueryOrder::Insertion);
        map.insert("zeta", "1").unwrap();
        map.insert("alpha", "2").unwrap();
        map.insert("mid", "3").unwrap();
        assert_eq!(names(&map), vec!["zeta", "alpha", "mid"]);

        map.set_order(QueryOrder::Sorted);
        assert_eq!(names(&map), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn reinsert_keeps_position_and_replaces_value() {
        let mut map = VariableMap::with_order(QueryOrder::Insertion);
        map.insert("a", "1").unwrap();
        map.insert("b", "2").unwrap();
        let prev = map.insert("a", None::<&str>).unwrap();
        assert_eq!(prev, Some(Some("1".to_string())));
        assert_eq!(names(&map), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(None));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn empty_name_rejected() {
        let mut map = VariableMap::new();
        assert!(matches!(map.insert("", "x"), Err(UrlError::EmptyVariableName)));
        assert!(map.is_empty());
    }

    #[test]
    fn collect_skips_empty_names() {
        let map: VariableMap = [("", Some("x")), ("ok", None)].into_iter().collect();
        assert_eq!(map.len(), 1);
        assert!(map.contains("ok"));
    }

    #[test]
    fn get_and_remove() {
        let mut map = VariableMap::new();
        map.insert("k", String::from("v")).unwrap();
        assert_eq!(map.get("k"), Some(Some("v")));
        assert_eq!(map.get("missing"), None);
        assert_eq!(map.remove("k"), Some(Some("v".to_string())));
        assert!(map.is_empty());
    }

    #[test]
    fn query_order_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            order: QueryOrder,
        }
        let w: Wrapper = toml::from_str("order = \"newest-first\"").unwrap();
        assert_eq!(w.order, QueryOrder::NewestFirst);
        let w: Wrapper = toml::from_str("order = \"sorted\"").unwrap();
        assert_eq!(w.order, QueryOrder::Sorted);
    }
}
