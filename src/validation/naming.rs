//! Identifier checks
//!
//! Logical table and column names end up as quoted identifiers downstream,
//! so the only hard rules are: non-empty, no control characters, no leading
//! or trailing whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\p{C}]+$").unwrap());

/// Whether a name is acceptable as a table or column identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(char::is_whitespace)
        && !name.ends_with(char::is_whitespace)
        && IDENTIFIER_REGEX.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_accepted() {
        assert!(is_valid_identifier("blogs"));
        assert!(is_valid_identifier("blog_id"));
        assert!(is_valid_identifier("Order Details"));
    }

    #[test]
    fn test_bad_names_rejected() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier(" blogs"));
        assert!(!is_valid_identifier("blogs\t"));
        assert!(!is_valid_identifier("bl\u{0}ogs"));
    }
}
