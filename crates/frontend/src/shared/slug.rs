//! Slug generation for catalog forms.
//!
//! The backend validates slugs on its side too; this helper only keeps
//! the form field in sync with the name while the user types.

/// Lowercase ASCII slug: alphanumerics kept, everything else collapsed
/// into single dashes, no leading or trailing dash.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// A slug a user edited by hand is acceptable when non-empty and already
/// in canonical form.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Ray-Ban"), "ray-ban");
        assert_eq!(slugify("Oliver Peoples"), "oliver-peoples");
        assert_eq!(slugify("  Round  Metal  "), "round-metal");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("D&G / Classic!"), "d-g-classic");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("ray-ban"));
        assert!(is_valid_slug("wayfarer2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Ray-Ban"));
        assert!(!is_valid_slug("ray--ban"));
        assert!(!is_valid_slug("-rayban"));
    }
}
