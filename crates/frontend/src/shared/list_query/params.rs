use std::collections::BTreeMap;

/// A single query parameter value, typed so that tri-state filters either
/// contribute a concrete value or no key at all. A stringly "undefined"
/// can never end up on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl ParamValue {
    pub fn render(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Bool(b) => b.to_string(),
        }
    }
}

/// Ordered key/value bag ready to serialize as an HTTP query string.
///
/// Keys are kept sorted, so [`QueryParams::cache_key`] is stable: the key
/// changes if and only if the effective request changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    entries: BTreeMap<String, ParamValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: ParamValue) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn set_str(&mut self, key: &str, value: &str) {
        self.set(key, ParamValue::Str(value.to_string()));
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, ParamValue::Int(value));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, ParamValue::Bool(value));
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs for the HTTP client's query builder. URL escaping is the
    /// client's job, not ours.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.render()))
            .collect()
    }

    /// Canonical serialization of the parameter set, safe to use as a
    /// memoization or effect-dependency key.
    pub fn cache_key(&self) -> String {
        let mut key = String::new();
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                key.push('&');
            }
            key.push_str(k);
            key.push('=');
            key.push_str(&v.render());
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_insertion_order_independent() {
        let mut a = QueryParams::new();
        a.set_int("page", 1);
        a.set_str("search", "aviator");
        a.set_bool("isActive", true);

        let mut b = QueryParams::new();
        b.set_bool("isActive", true);
        b.set_str("search", "aviator");
        b.set_int("page", 1);

        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), "isActive=true&page=1&search=aviator");
    }

    #[test]
    fn test_cache_key_changes_with_values() {
        let mut a = QueryParams::new();
        a.set_int("page", 1);
        let mut b = a.clone();
        assert_eq!(a.cache_key(), b.cache_key());
        b.set_int("page", 2);
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_set_overwrites() {
        let mut p = QueryParams::new();
        p.set_str("status", "draft");
        p.set_str("status", "published");
        assert_eq!(p.len(), 1);
        assert_eq!(p.get("status"), Some(&ParamValue::Str("published".into())));
    }

    #[test]
    fn test_to_pairs_renders_typed_values() {
        let mut p = QueryParams::new();
        p.set_bool("isActive", false);
        p.set_int("limit", 10);
        assert_eq!(
            p.to_pairs(),
            vec![
                ("isActive".to_string(), "false".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }
}
