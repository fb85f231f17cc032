//! Query-string assembly for list and bulk endpoints.

use std::fmt::Display;

/// Ordered key/value pairs, percent-encoded on render. Repeated keys are
/// allowed; the bulk message delete endpoint expects them.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_owned(), value.to_string()));
    }

    pub(crate) fn push_opt(&mut self, key: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Render `path?k=v&…`, or `path` unchanged when no pairs were added.
    pub(crate) fn append_to(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_owned();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        format!("{}?{}", path, encoded.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_leaves_path_unchanged() {
        assert_eq!(QueryString::new().append_to("/connections"), "/connections");
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut query = QueryString::new();
        query.push("search", "hello world&co");
        assert_eq!(
            query.append_to("/messages"),
            "/messages?search=hello%20world%26co"
        );
    }

    #[test]
    fn repeated_keys_are_preserved_in_order() {
        let mut query = QueryString::new();
        query.push("message_ids", "a");
        query.push("message_ids", "b");
        assert_eq!(
            query.append_to("/messages"),
            "/messages?message_ids=a&message_ids=b"
        );
    }

    #[test]
    fn absent_options_are_skipped() {
        let mut query = QueryString::new();
        query.push_opt("status", None::<&str>);
        query.push_opt("limit", Some(20));
        assert_eq!(query.append_to("/syncs"), "/syncs?limit=20");
    }
}
