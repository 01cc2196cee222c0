//! Shared domain enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sitemap protocol hint describing how often a page is likely to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named public routes of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    HomePage,
    ProductSearch,
    ContactUs,
    NewsArchive,
    Blog,
    Boards,
    Category,
    Manufacturer,
    Product,
    ProductsByTag,
    Topic,
    Sitemap,
    SitemapIndexed,
}

impl RouteName {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::HomePage => "HomePage",
            RouteName::ProductSearch => "ProductSearch",
            RouteName::ContactUs => "ContactUs",
            RouteName::NewsArchive => "NewsArchive",
            RouteName::Blog => "Blog",
            RouteName::Boards => "Boards",
            RouteName::Category => "Category",
            RouteName::Manufacturer => "Manufacturer",
            RouteName::Product => "Product",
            RouteName::ProductsByTag => "ProductsByTag",
            RouteName::Topic => "Topic",
            RouteName::Sitemap => "Sitemap",
            RouteName::SitemapIndexed => "SitemapIndexed",
        }
    }

    /// Routes that address a single slugged catalog entity.
    pub fn requires_se_name(self) -> bool {
        matches!(
            self,
            RouteName::Category
                | RouteName::Manufacturer
                | RouteName::Product
                | RouteName::ProductsByTag
                | RouteName::Topic
        )
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
