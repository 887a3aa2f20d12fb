use regex::Regex;
use std::sync::LazyLock;

/// Lowercase words separated by single hyphens, e.g. `organic-oat-milk`
static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

pub(crate) fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    if !SLUG.is_match(slug) {
        return Err(validator::ValidationError::new("invalid_slug"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        for slug in ["oat-milk", "a", "vitamin-b12", "100-percent-juice"] {
            assert!(validate_slug(slug).is_ok(), "{slug} should be valid");
        }
    }

    #[test]
    fn test_invalid_slugs() {
        for slug in ["", "Oat-Milk", "oat--milk", "-oat", "oat-", "oat milk", "owoc_leśny"] {
            assert!(validate_slug(slug).is_err(), "{slug:?} should be invalid");
        }
    }
}
