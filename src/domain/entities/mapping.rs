//! Mapping entity associating an original URL with a numeric short id.

/// A stored mapping between a user-supplied URL and its sequential short id.
///
/// `original_url` is kept exactly as received; it is never normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub original_url: String,
    pub short_url: i64,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(original_url: impl Into<String>, short_url: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub original_url: String,
    pub short_url: i64,
}

impl NewMapping {
    /// Builds the mapping for the next id after `existing` stored mappings.
    pub fn next(original_url: impl Into<String>, existing: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: existing + 1,
        }
    }
}

impl From<NewMapping> for Mapping {
    fn from(new_mapping: NewMapping) -> Self {
        Self {
            original_url: new_mapping.original_url,
            short_url: new_mapping.short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = Mapping::new("https://example.com", 1);

        assert_eq!(mapping.original_url, "https://example.com");
        assert_eq!(mapping.short_url, 1);
    }

    #[test]
    fn test_new_mapping_takes_next_id() {
        let new_mapping = NewMapping::next("https://rust-lang.org", 41);

        assert_eq!(new_mapping.short_url, 42);
        assert_eq!(new_mapping.original_url, "https://rust-lang.org");
    }

    #[test]
    fn test_first_mapping_starts_at_one() {
        assert_eq!(NewMapping::next("https://example.com", 0).short_url, 1);
    }

    #[test]
    fn test_new_mapping_into_mapping() {
        let mapping: Mapping = NewMapping::next("https://example.com/path?q=1", 2).into();

        assert_eq!(mapping, Mapping::new("https://example.com/path?q=1", 3));
    }
}
