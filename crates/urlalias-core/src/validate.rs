//! Alias validity pattern.
//!
//! An alias must start with an RFC3986 pchar-style character (letters,
//! digits, and a restricted punctuation set) and may continue with the same
//! set plus `/`. A leading `/` and the `#` fragment delimiter are rejected,
//! and `%` escapes in the tail must be exactly two hex digits. Validation is
//! advisory: it is surfaced by diagnostics, never enforced on write.

use once_cell::sync::Lazy;
use regex::Regex;

/// The alias path pattern, anchored at both ends.
pub const ALIAS_PATTERN: &str =
    r"^[a-zA-Z0-9._~!$&'()*+,;=:@%\-](?:[a-zA-Z0-9._~!$&'()*+,;=:@/\-]|%[0-9a-fA-F]{2})*$";

static ALIAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(ALIAS_PATTERN).expect("alias pattern compiles"));

/// Whether `value` is a well-formed alias path. Empty strings are invalid.
pub fn is_valid_alias(value: &str) -> bool {
    ALIAS_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_paths() {
        assert!(is_valid_alias("products/widget-1"));
        assert!(is_valid_alias("blog/old-post"));
        assert!(is_valid_alias("a"));
        assert!(is_valid_alias("about.html"));
    }

    #[test]
    fn rejects_leading_slash() {
        assert!(!is_valid_alias("/products/widget-1"));
        assert!(!is_valid_alias("/"));
    }

    #[test]
    fn rejects_fragment_delimiter() {
        assert!(!is_valid_alias("products#frag"));
        assert!(!is_valid_alias("#frag"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_alias(""));
    }

    #[test]
    fn percent_escapes_need_two_hex_digits() {
        assert!(is_valid_alias("a%2Fb"));
        assert!(is_valid_alias("a%C3%A9"));
        assert!(!is_valid_alias("a%2gb"));
        assert!(!is_valid_alias("a%2"));
        assert!(!is_valid_alias("a%"));
    }

    #[test]
    fn rfc3986_punctuation_allowed() {
        assert!(is_valid_alias("a~b_c.d!e$f&g'h(i)j*k+l,m;n=o:p@q"));
    }

    #[test]
    fn rejects_whitespace_and_question_mark() {
        assert!(!is_valid_alias("a b"));
        assert!(!is_valid_alias("a?b=1"));
    }
}
