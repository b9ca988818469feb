//! URL template and query-string helpers.

/// Ordered query parameters for a request.
///
/// Empty values are dropped at insertion time and array-valued parameters
/// repeat the key once per element, so the serialized string never carries
/// placeholder noise like `b=` or `c=%5B1%2C2%5D`.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key-value pair. Empty values are dropped.
    pub fn push(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        if value.is_empty() {
            return;
        }
        self.pairs.push((key.to_string(), value));
    }

    /// Append the pair only when the value is present (and non-empty).
    pub fn push_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append the key once per element, preserving element order.
    pub fn push_all(&mut self, key: &str, values: &[impl ToString]) {
        for value in values {
            self.push(key, value.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serialize to `k=v&k2=v2` with percent-encoded keys and values,
    /// preserving insertion order.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(v)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Substitute `:name` tokens in a path template with encoded values.
///
/// Tokens with no matching parameter are left untouched.
pub fn fill_path(template: &str, params: &[(&str, &str)]) -> String {
    template
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| urlencoding::encode(value).into_owned())
                .unwrap_or_else(|| segment.to_string()),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
