use crate::models::KNOWN_REGIONS;

/// Shorten a credential for logs: first and last four characters only.
///
/// Keys of twelve characters or fewer are fully masked, so at most
/// two thirds of any key is ever shown.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Whether `region` is one of the documented codes (case-insensitive)
pub fn is_known_region(region: &str) -> bool {
    let region = region.trim().to_uppercase();
    KNOWN_REGIONS.iter().any(|known| *known == region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(
            mask_key("550e8400-e29b-41d4-a716-446655440000"),
            "550e...0000"
        );
        assert_eq!(mask_key("abc123"), "******");
        assert_eq!(mask_key(""), "");
    }

    #[test]
    fn test_mask_key_short_keys_fully_hidden() {
        assert_eq!(mask_key("abcdefghi"), "*********");
        assert_eq!(mask_key("abcdefghijkl"), "************");
        assert_eq!(mask_key("abcdefghijklm"), "abcd...jklm");
    }

    #[test]
    fn test_is_known_region() {
        assert!(is_known_region("BR"));
        assert!(is_known_region("eu"));
        assert!(is_known_region(" oc "));
        assert!(!is_known_region("XX"));
        assert!(!is_known_region(""));
    }
}
