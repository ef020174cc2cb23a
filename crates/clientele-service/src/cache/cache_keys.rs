//! Cache key layout: `{prefix}:{region}:{id}`.

use std::fmt;

/// Independent cache regions, each with its own TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheRegion {
    /// Customer records.
    Customer,
    /// Anything else.
    Default,
}

impl CacheRegion {
    /// Region name as it appears in keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for CacheRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a single entry.
#[must_use]
pub fn entry(prefix: &str, region: CacheRegion, id: &str) -> String {
    format!("{prefix}:{region}:{id}")
}

/// Pattern matching every entry of a region.
#[must_use]
pub fn region_pattern(prefix: &str, region: CacheRegion) -> String {
    format!("{prefix}:{region}:*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key() {
        assert_eq!(entry("clientele", CacheRegion::Customer, "42"), "clientele:customer:42");
        assert_eq!(entry("app", CacheRegion::Default, "x"), "app:default:x");
    }

    #[test]
    fn test_region_pattern() {
        assert_eq!(region_pattern("clientele", CacheRegion::Customer), "clientele:customer:*");
    }

    #[test]
    fn test_pattern_covers_entries_of_its_region_only() {
        let pattern = region_pattern("p", CacheRegion::Customer);
        let prefix = pattern.trim_end_matches('*');
        assert!(entry("p", CacheRegion::Customer, "1").starts_with(prefix));
        assert!(!entry("p", CacheRegion::Default, "1").starts_with(prefix));
    }
}
