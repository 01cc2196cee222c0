//! Catalog records consumed by the sitemap and cache layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Entities addressable through a search-engine friendly name.
///
/// Localized names are keyed by the language's unique SEO code.
pub trait SlugSupported {
    fn display_name(&self) -> &str;
    fn se_name(&self) -> Option<&str>;
    fn localized_se_names(&self) -> &BTreeMap<String, String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub id: u32,
    pub name: String,
    /// Two-letter code placed in localized URL paths, e.g. `en`.
    pub unique_seo_code: String,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub limited_to_stores: bool,
    #[serde(default)]
    pub store_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub se_name: Option<String>,
    #[serde(default)]
    pub localized_se_names: BTreeMap<String, String>,
    #[serde(default)]
    pub parent_category_id: u32,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub limited_to_stores: bool,
    #[serde(default)]
    pub store_ids: Vec<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_on: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub se_name: Option<String>,
    #[serde(default)]
    pub localized_se_names: BTreeMap<String, String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub limited_to_stores: bool,
    #[serde(default)]
    pub store_ids: Vec<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_on: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub se_name: Option<String>,
    #[serde(default)]
    pub localized_se_names: BTreeMap<String, String>,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub deleted: bool,
    /// Products only reachable through a parent (grouped products) are `false`.
    #[serde(default = "default_true")]
    pub visible_individually: bool,
    #[serde(default)]
    pub limited_to_stores: bool,
    #[serde(default)]
    pub store_ids: Vec<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_on: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_on: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTagRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub se_name: Option<String>,
    #[serde(default)]
    pub localized_se_names: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub id: u32,
    pub system_name: String,
    pub title: String,
    #[serde(default)]
    pub se_name: Option<String>,
    #[serde(default)]
    pub localized_se_names: BTreeMap<String, String>,
    #[serde(default)]
    pub include_in_sitemap: bool,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub limited_to_stores: bool,
    #[serde(default)]
    pub store_ids: Vec<u32>,
}

/// Records that may be restricted to a subset of stores.
pub trait StoreMapped {
    fn limited_to_stores(&self) -> bool;
    fn store_ids(&self) -> &[u32];

    fn available_in_store(&self, store_id: u32) -> bool {
        !self.limited_to_stores() || self.store_ids().contains(&store_id)
    }
}

fn default_true() -> bool {
    true
}

impl SlugSupported for CategoryRecord {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn se_name(&self) -> Option<&str> {
        self.se_name.as_deref()
    }

    fn localized_se_names(&self) -> &BTreeMap<String, String> {
        &self.localized_se_names
    }
}

impl SlugSupported for ManufacturerRecord {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn se_name(&self) -> Option<&str> {
        self.se_name.as_deref()
    }

    fn localized_se_names(&self) -> &BTreeMap<String, String> {
        &self.localized_se_names
    }
}

impl SlugSupported for ProductRecord {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn se_name(&self) -> Option<&str> {
        self.se_name.as_deref()
    }

    fn localized_se_names(&self) -> &BTreeMap<String, String> {
        &self.localized_se_names
    }
}

impl SlugSupported for ProductTagRecord {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn se_name(&self) -> Option<&str> {
        self.se_name.as_deref()
    }

    fn localized_se_names(&self) -> &BTreeMap<String, String> {
        &self.localized_se_names
    }
}

impl SlugSupported for TopicRecord {
    fn display_name(&self) -> &str {
        &self.title
    }

    fn se_name(&self) -> Option<&str> {
        self.se_name.as_deref()
    }

    fn localized_se_names(&self) -> &BTreeMap<String, String> {
        &self.localized_se_names
    }
}

impl StoreMapped for LanguageRecord {
    fn limited_to_stores(&self) -> bool {
        self.limited_to_stores
    }

    fn store_ids(&self) -> &[u32] {
        &self.store_ids
    }
}

impl StoreMapped for CategoryRecord {
    fn limited_to_stores(&self) -> bool {
        self.limited_to_stores
    }

    fn store_ids(&self) -> &[u32] {
        &self.store_ids
    }
}

impl StoreMapped for ManufacturerRecord {
    fn limited_to_stores(&self) -> bool {
        self.limited_to_stores
    }

    fn store_ids(&self) -> &[u32] {
        &self.store_ids
    }
}

impl StoreMapped for ProductRecord {
    fn limited_to_stores(&self) -> bool {
        self.limited_to_stores
    }

    fn store_ids(&self) -> &[u32] {
        &self.store_ids
    }
}

impl StoreMapped for TopicRecord {
    fn limited_to_stores(&self) -> bool {
        self.limited_to_stores
    }

    fn store_ids(&self) -> &[u32] {
        &self.store_ids
    }
}
