//! Pattern-based contact extraction. Both extractors run over the raw
//! text: `@`, dots, dashes, and parentheses are load-bearing, so nothing
//! is normalized first.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

// Optional country code, optional parenthesized area code, 3-digit
// exchange, 4-digit line, permissive space/dot/dash separators.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}").unwrap());

/// First email-shaped match in the text, scanning top to bottom.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped match in the text. Phone-shaped ID numbers are an
/// accepted false positive of the heuristic.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_basic() {
        assert_eq!(
            extract_email("Contact: john.smith@example.com or call").as_deref(),
            Some("john.smith@example.com")
        );
    }

    #[test]
    fn test_email_with_plus_and_subdomain() {
        assert_eq!(
            extract_email("jane+jobs@mail.example.co.uk").as_deref(),
            Some("jane+jobs@mail.example.co.uk")
        );
    }

    #[test]
    fn test_email_first_match_wins() {
        let text = "primary: a@x.com\nsecondary: b@y.com";
        assert_eq!(extract_email(text).as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_email_rejects_short_tld() {
        assert!(extract_email("not-an-email@host.c").is_none());
    }

    #[test]
    fn test_email_empty_input() {
        assert!(extract_email("").is_none());
    }

    #[test]
    fn test_phone_dashed() {
        assert_eq!(extract_phone("call 555-123-4567 today").as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_phone_parenthesized_area_code() {
        assert_eq!(extract_phone("(555) 123-4567").as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(extract_phone("+1 555 123 4567").as_deref(), Some("+1 555 123 4567"));
    }

    #[test]
    fn test_phone_dotted() {
        assert_eq!(extract_phone("555.123.4567").as_deref(), Some("555.123.4567"));
    }

    #[test]
    fn test_phone_absent() {
        assert!(extract_phone("no digits here").is_none());
        assert!(extract_phone("").is_none());
    }
}
