//! Client-side email format check.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether `email` looks like `local@domain.tld`.
///
/// This is a shape check only: ASCII without whitespace, exactly one
/// `@`-separated local part, and at least one dot in the domain. Case does not
/// matter.
pub fn is_valid_email(email: &str) -> bool {
    email.is_ascii() && EMAIL_PATTERN.is_match(&email.to_ascii_lowercase())
}
