use time::OffsetDateTime;

use crate::domain::types::ChangeFrequency;

/// One localized variant of a sitemap URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLocation {
    pub href: String,
    /// SEO code found in the localized path; `None` when it cannot be resolved.
    pub hreflang: Option<String>,
}

/// A page listed in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Absolute, non-localized URL.
    pub location: String,
    /// Localized URLs in language display order; empty when localization is off.
    pub alternate_locations: Vec<AlternateLocation>,
    pub change_frequency: ChangeFrequency,
    pub last_modified: OffsetDateTime,
}

impl SitemapEntry {
    pub fn new(
        location: impl Into<String>,
        change_frequency: ChangeFrequency,
        last_modified: OffsetDateTime,
    ) -> Self {
        Self {
            location: location.into(),
            alternate_locations: Vec::new(),
            change_frequency,
            last_modified,
        }
    }

    pub fn with_alternates(mut self, alternates: Vec<AlternateLocation>) -> Self {
        self.alternate_locations = alternates;
        self
    }
}

/// A `<sitemap>` child of a sitemap index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapReference {
    pub location: String,
    pub last_modified: OffsetDateTime,
}
