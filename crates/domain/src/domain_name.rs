use fancy_regex::Regex;
use std::sync::LazyLock;

/// Maximum total length of a domain name, dots included.
pub const MAX_DOMAIN_LENGTH: usize = 255;

/// Maximum length of a single label.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Classic DNS label grammar: 1..=255 chars overall, two or more
/// dot-separated labels of 1..=63 alphanumerics/hyphens, no hyphen at
/// either end of a label.
static RE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?=.{1,255}$)[0-9A-Za-z](?:(?:[0-9A-Za-z]|-){0,61}[0-9A-Za-z])?(?:\.[0-9A-Za-z](?:(?:[0-9A-Za-z]|-){0,61}[0-9A-Za-z])?)+$",
    )
    .expect("domain grammar is a valid pattern")
});

/// Returns true when `value` is a syntactically valid multi-label domain name.
///
/// Absent input never matches. A regex engine failure (backtrack limit) is
/// reported as a non-match since the input is untrusted.
pub fn is_valid_domain(value: Option<&str>) -> bool {
    match value {
        Some(domain) => RE_DOMAIN.is_match(domain).unwrap_or(false),
        None => false,
    }
}
