//! Normalization of path parameters used as repository filters.
//!
//! Stored tiers are upper case (`"S"`, `"COMEDY"`) and stored locations are
//! lower case, so callers normalize before filtering to make lookups
//! case-insensitive.

/// Normalize a movie tier path parameter.
pub fn normalize_tier(tier: &str) -> String {
    tier.trim().to_uppercase()
}

/// Normalize a food place location path parameter.
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_is_uppercased() {
        assert_eq!(normalize_tier("comedy"), "COMEDY");
        assert_eq!(normalize_tier("CoMeDy"), "COMEDY");
        assert_eq!(normalize_tier("s"), "S");
    }

    #[test]
    fn location_is_lowercased() {
        assert_eq!(normalize_location("Seattle"), "seattle");
        assert_eq!(normalize_location("NEW YORK"), "new york");
    }

    #[test]
    fn surrounding_whitespace_is_dropped() {
        assert_eq!(normalize_tier(" a "), "A");
        assert_eq!(normalize_location(" Portland\n"), "portland");
    }

    #[test]
    fn differently_cased_inputs_agree() {
        assert_eq!(normalize_tier("comedy"), normalize_tier("COMEDY"));
        assert_eq!(normalize_location("boston"), normalize_location("BOSTON"));
    }
}
