//! Request-URI normalization.
//!
//! The resolver matches aliases against a cleaned path: everything after the
//! first `?` is split off as the query string, and leading slashes are
//! stripped. The query keeps its raw form so it can be re-appended to the
//! redirect target unchanged.

/// Request-scoped view of the inbound URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Lookup path with leading slashes and query string removed.
    pub path: String,
    /// Raw query string (without the `?`), empty if none.
    pub query: String,
}

impl RequestContext {
    pub fn new(request_uri: &str) -> Self {
        let (path, query) = match request_uri.split_once('?') {
            Some((p, q)) => (p, q),
            None => (request_uri, ""),
        };
        RequestContext {
            path: path.trim_start_matches('/').to_string(),
            query: query.to_string(),
        }
    }

    /// True when there is nothing to look up (resolver no-op).
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
