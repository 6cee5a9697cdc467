use multimap::MultiMap;
use url::form_urlencoded;

/// Query string builder that only carries parameters that are actually set.
///
/// Parameters are rendered in sorted key order so that the same set of
/// parameters always produces the same string, whatever the insertion order.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: MultiMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<K: Into<String>, V: ToString>(&mut self, key: K, value: V) {
        self.params.insert(key.into(), value.to_string());
    }

    /// Appends the parameter only when the value is present.
    pub fn push_opt<K: Into<String>, V: ToString>(&mut self, key: K, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends `key=true` only when the flag is set.
    pub fn push_flag<K: Into<String>>(&mut self, key: K, flag: bool) {
        if flag {
            self.push(key, "true");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.iter_all().map(|(_, values)| values.len()).sum()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// All pairs, sorted by key.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .params
            .iter_all()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
            .collect();
        pairs.sort();
        pairs
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
