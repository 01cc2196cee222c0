//! In-memory catalog loaded from a TOML snapshot.
//!
//! Implements every repository trait the sitemap reads from, applying the
//! same visibility rules a database-backed store would: published, not
//! deleted and available in the requested store.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::application::repos::{
    CategoriesRepo, LanguagesRepo, ManufacturersRepo, ProductQueryFilter, ProductSort,
    ProductTagsRepo, ProductsRepo, RepoError, TopicsRepo,
};
use crate::application::sitemap::SitemapRepos;
use crate::domain::entities::{
    CategoryRecord, LanguageRecord, ManufacturerRecord, ProductRecord, ProductTagRecord,
    StoreMapped, TopicRecord,
};
use crate::domain::error::DomainError;

use super::error::InfraError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
    languages: Vec<LanguageRecord>,
    categories: Vec<CategoryRecord>,
    manufacturers: Vec<ManufacturerRecord>,
    products: Vec<ProductRecord>,
    product_tags: Vec<ProductTagRecord>,
    topics: Vec<TopicRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    document: Arc<CatalogDocument>,
}

impl FileCatalog {
    pub async fn load(path: &Path) -> Result<Self, InfraError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|err| {
            InfraError::catalog(format!("failed to read `{}`: {err}", path.display()))
        })?;
        let catalog = Self::from_toml_str(&text).map_err(|err| match err {
            InfraError::Catalog { message } => {
                InfraError::catalog(format!("`{}`: {message}", path.display()))
            }
            other => other,
        })?;

        let document = &catalog.document;
        info!(
            path = %path.display(),
            languages = document.languages.len(),
            categories = document.categories.len(),
            manufacturers = document.manufacturers.len(),
            products = document.products.len(),
            product_tags = document.product_tags.len(),
            topics = document.topics.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, InfraError> {
        let mut document: CatalogDocument = toml::from_str(text)
            .map_err(|err| InfraError::catalog(format!("invalid catalog TOML: {err}")))?;
        validate(&document)?;
        canonicalize_localized_keys(&mut document)?;
        Ok(Self {
            document: Arc::new(document),
        })
    }

    /// Bundle this catalog as the sitemap's repositories.
    pub fn sitemap_repos(&self) -> SitemapRepos {
        let shared = Arc::new(self.clone());
        SitemapRepos {
            categories: shared.clone(),
            manufacturers: shared.clone(),
            products: shared.clone(),
            product_tags: shared.clone(),
            topics: shared.clone(),
            languages: shared,
        }
    }
}

fn validate(document: &CatalogDocument) -> Result<(), DomainError> {
    unique_ids("language", document.languages.iter().map(|l| l.id))?;
    unique_ids("category", document.categories.iter().map(|c| c.id))?;
    unique_ids("manufacturer", document.manufacturers.iter().map(|m| m.id))?;
    unique_ids("product", document.products.iter().map(|p| p.id))?;
    unique_ids("product tag", document.product_tags.iter().map(|t| t.id))?;
    unique_ids("topic", document.topics.iter().map(|t| t.id))?;

    let mut codes = BTreeSet::new();
    for language in &document.languages {
        let code = language.unique_seo_code.trim();
        if code.is_empty() || code.contains('/') {
            return Err(DomainError::validation(format!(
                "language {} has an invalid seo code `{}`",
                language.id, language.unique_seo_code
            )));
        }
        if !codes.insert(code.to_ascii_lowercase()) {
            return Err(DomainError::DuplicateSeoCode {
                code: code.to_string(),
            });
        }
    }

    Ok(())
}

/// Key every localized SE name by its language's declared SEO code.
///
/// Codes match case-insensitively here so later lookups by
/// `unique_seo_code` can be exact.
fn canonicalize_localized_keys(document: &mut CatalogDocument) -> Result<(), DomainError> {
    let codes: HashMap<String, String> = document
        .languages
        .iter()
        .map(|l| {
            (
                l.unique_seo_code.trim().to_ascii_lowercase(),
                l.unique_seo_code.clone(),
            )
        })
        .collect();

    let localized = document
        .categories
        .iter_mut()
        .map(|c| &mut c.localized_se_names)
        .chain(document.manufacturers.iter_mut().map(|m| &mut m.localized_se_names))
        .chain(document.products.iter_mut().map(|p| &mut p.localized_se_names))
        .chain(document.product_tags.iter_mut().map(|t| &mut t.localized_se_names))
        .chain(document.topics.iter_mut().map(|t| &mut t.localized_se_names));
    for names in localized {
        let mut canonical = BTreeMap::new();
        for (key, value) in std::mem::take(names) {
            let code = codes
                .get(&key.trim().to_ascii_lowercase())
                .ok_or_else(|| {
                    DomainError::validation(format!(
                        "localized se name uses unknown language `{key}`"
                    ))
                })?;
            if canonical.insert(code.clone(), value).is_some() {
                return Err(DomainError::validation(format!(
                    "localized se name for `{code}` is declared more than once"
                )));
            }
        }
        *names = canonical;
    }

    Ok(())
}

fn unique_ids(entity: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::duplicate_id(entity, id));
        }
    }
    Ok(())
}

#[async_trait]
impl CategoriesRepo for FileCatalog {
    async fn list_categories(&self, store_id: u32) -> Result<Vec<CategoryRecord>, RepoError> {
        let mut categories: Vec<_> = self
            .document
            .categories
            .iter()
            .filter(|c| c.published && !c.deleted && c.available_in_store(store_id))
            .cloned()
            .collect();
        categories.sort_by_key(|c| (c.parent_category_id, c.display_order, c.id));
        Ok(categories)
    }
}

#[async_trait]
impl ManufacturersRepo for FileCatalog {
    async fn list_manufacturers(
        &self,
        store_id: u32,
    ) -> Result<Vec<ManufacturerRecord>, RepoError> {
        let mut manufacturers: Vec<_> = self
            .document
            .manufacturers
            .iter()
            .filter(|m| m.published && !m.deleted && m.available_in_store(store_id))
            .cloned()
            .collect();
        manufacturers.sort_by_key(|m| (m.display_order, m.id));
        Ok(manufacturers)
    }
}

#[async_trait]
impl ProductsRepo for FileCatalog {
    async fn search_products(
        &self,
        filter: &ProductQueryFilter,
    ) -> Result<Vec<ProductRecord>, RepoError> {
        let mut products: Vec<_> = self
            .document
            .products
            .iter()
            .filter(|p| p.published && !p.deleted)
            .filter(|p| !filter.visible_individually_only || p.visible_individually)
            .filter(|p| filter.store_id.is_none_or(|store_id| p.available_in_store(store_id)))
            .cloned()
            .collect();

        match filter.order_by {
            ProductSort::Position => {}
            ProductSort::CreatedOn => products.sort_by_key(|p| (p.created_on, p.id)),
            ProductSort::Name => products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id))),
        }
        Ok(products)
    }
}

#[async_trait]
impl ProductTagsRepo for FileCatalog {
    async fn list_product_tags(&self) -> Result<Vec<ProductTagRecord>, RepoError> {
        Ok(self.document.product_tags.clone())
    }
}

#[async_trait]
impl TopicsRepo for FileCatalog {
    async fn list_topics(&self, store_id: u32) -> Result<Vec<TopicRecord>, RepoError> {
        let mut topics: Vec<_> = self
            .document
            .topics
            .iter()
            .filter(|t| t.published && t.available_in_store(store_id))
            .cloned()
            .collect();
        topics.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.system_name.cmp(&b.system_name))
        });
        Ok(topics)
    }
}

#[async_trait]
impl LanguagesRepo for FileCatalog {
    async fn list_languages(&self, store_id: u32) -> Result<Vec<LanguageRecord>, RepoError> {
        let mut languages: Vec<_> = self
            .document
            .languages
            .iter()
            .filter(|l| l.published && l.available_in_store(store_id))
            .cloned()
            .collect();
        languages.sort_by_key(|l| (l.display_order, l.id));
        Ok(languages)
    }
}
