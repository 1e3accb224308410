//! Redirect responder: builds the HTTP response for a matched alias.

use crate::config::ProductionStatus;

pub const HTTP_FOUND: u16 = 302;
pub const HTTP_FOUND_TEXT: &str = "Found";
pub const HTTP_MOVED_PERMANENTLY: u16 = 301;
pub const HTTP_MOVED_PERMANENTLY_TEXT: &str = "Moved Permanently";

/// HTTP redirect to the canonical article URL. Terminates request handling;
/// no further output is produced by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResponse {
    pub status: u16,
    pub status_text: &'static str,
    /// `Location` header value: canonical URL plus the original query string.
    pub location: String,
}

/// Outcome of a matched alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redirect(RedirectResponse),
    /// Debug mode: no redirect is emitted; the computed target is rendered
    /// as a visible diagnostic line instead.
    Debug(String),
}

impl Outcome {
    /// The computed target URL regardless of mode.
    pub fn location(&self) -> &str {
        match self {
            Outcome::Redirect(r) => &r.location,
            Outcome::Debug(loc) => loc,
        }
    }
}

/// Re-append the original query string to the redirect target.
pub fn target_with_query(target: &str, query: &str) -> String {
    if query.is_empty() {
        target.to_string()
    } else {
        format!("{target}?{query}")
    }
}

/// Build the outcome for a matched alias. 301 is only used when the
/// permanent-redirect preference is set and the site is live; testing mode
/// stays on 302 so a misconfigured alias is never cached permanently.
pub fn build_outcome(
    target_url: &str,
    query: &str,
    permanent: bool,
    production: ProductionStatus,
) -> Outcome {
    let location = target_with_query(target_url, query);

    if production == ProductionStatus::Debug {
        return Outcome::Debug(location);
    }

    let (status, status_text) = if permanent && production == ProductionStatus::Live {
        (HTTP_MOVED_PERMANENTLY, HTTP_MOVED_PERMANENTLY_TEXT)
    } else {
        (HTTP_FOUND, HTTP_FOUND_TEXT)
    };

    Outcome::Redirect(RedirectResponse {
        status,
        status_text,
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporary_redirect_by_default() {
        let out = build_outcome("https://example.com/a/42", "", false, ProductionStatus::Live);
        match out {
            Outcome::Redirect(r) => {
                assert_eq!(r.status, 302);
                assert_eq!(r.status_text, "Found");
                assert_eq!(r.location, "https://example.com/a/42");
            }
            _ => panic!("expected redirect"),
        }
    }

    #[test]
    fn permanent_redirect_only_when_live() {
        let live = build_outcome("https://example.com/a", "", true, ProductionStatus::Live);
        match live {
            Outcome::Redirect(r) => {
                assert_eq!(r.status, 301);
                assert_eq!(r.status_text, "Moved Permanently");
            }
            _ => panic!("expected redirect"),
        }

        let testing = build_outcome("https://example.com/a", "", true, ProductionStatus::Testing);
        match testing {
            Outcome::Redirect(r) => assert_eq!(r.status, 302),
            _ => panic!("expected redirect"),
        }
    }

    #[test]
    fn query_string_appended_unchanged() {
        let out = build_outcome(
            "https://example.com/a/42",
            "ref=x&utm=1",
            false,
            ProductionStatus::Live,
        );
        assert_eq!(out.location(), "https://example.com/a/42?ref=x&utm=1");
    }

    #[test]
    fn debug_mode_never_redirects() {
        let out = build_outcome("https://example.com/a/42", "ref=x", true, ProductionStatus::Debug);
        match out {
            Outcome::Debug(loc) => assert_eq!(loc, "https://example.com/a/42?ref=x"),
            _ => panic!("expected debug outcome"),
        }
    }
}
