use serde::Serialize;
use serde_json::{Map, Value};

/// Page sentinel: no next/previous page.
pub const NO_PAGE: u64 = 0;

/// Pagination links carried by the envelope.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Links {
    pub next: u64,
    pub prev: u64,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            next: NO_PAGE,
            prev: NO_PAGE,
        }
    }
}

/// Uniform response envelope: `{results, links: {next, prev}, meta}`.
///
/// Constructed fresh for every request so pagination state never leaks
/// between requests.
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    pub results: Value,
    pub links: Links,
    pub meta: Map<String, Value>,
}

impl Default for Payload {
    fn default() -> Self {
        Self {
            results: Value::Array(vec![]),
            links: Links::default(),
            meta: Map::new(),
        }
    }
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the `results` field.
    pub fn set_results(&mut self, data: Value) {
        self.results = data;
    }

    /// Replace the pagination links.
    pub fn set_links(&mut self, next: u64, prev: u64) {
        self.links = Links { next, prev };
    }

    /// Restore `links` and `meta` to empty defaults.
    ///
    /// Write handlers call this before setting a fresh `results` so a
    /// success message never carries pagination links from a prior read.
    pub fn reset(&mut self) {
        self.links = Links::default();
        self.meta = Map::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_shape() {
        let payload = Payload::new();
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v, json!({"results": [], "links": {"next": 0, "prev": 0}, "meta": {}}));
    }

    #[test]
    fn test_reset_clears_links_and_meta() {
        let mut payload = Payload::new();
        payload.set_links(3, 1);
        payload.meta.insert("count".into(), json!(42));

        payload.reset();
        payload.set_results(json!({"message": "Success create data"}));

        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["links"], json!({"next": 0, "prev": 0}));
        assert_eq!(v["meta"], json!({}));
        assert_eq!(v["results"]["message"], "Success create data");
    }
}
