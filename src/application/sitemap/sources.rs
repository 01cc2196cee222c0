//! URL sources feeding the sitemap.
//!
//! Each source lists raw URL specs for one kind of page. The service runs
//! the enabled sources in a fixed order; that order decides page boundaries.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::warn;

use crate::application::repos::{
    CategoriesRepo, LanguagesRepo, ManufacturersRepo, ProductQueryFilter, ProductSort,
    ProductTagsRepo, ProductsRepo, TopicsRepo,
};
use crate::domain::entities::SlugSupported;
use crate::domain::slug::{SlugError, resolve_se_name};
use crate::domain::types::{ChangeFrequency, RouteName};

use super::{SitemapError, SitemapOptions};

/// Per-language SE names of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeNames {
    pub default: String,
    pub localized: BTreeMap<String, String>,
}

impl SeNames {
    pub fn of<E: SlugSupported + ?Sized>(entity: &E) -> Result<Self, SlugError> {
        let default = resolve_se_name(entity, None)?;
        let mut localized = BTreeMap::new();
        for code in entity.localized_se_names().keys() {
            localized.insert(code.clone(), resolve_se_name(entity, Some(code))?);
        }
        Ok(Self { default, localized })
    }

    pub fn for_language(&self, seo_code: Option<&str>) -> &str {
        seo_code
            .and_then(|code| self.localized.get(code))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTarget {
    /// A named route, optionally addressing a slugged entity.
    Route {
        route: RouteName,
        se_names: Option<SeNames>,
    },
    /// A store-relative path from configuration; never localized.
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUrlSpec {
    pub target: UrlTarget,
    pub change_frequency: ChangeFrequency,
    /// `None` means "now": the source does not track modification time.
    pub last_modified: Option<OffsetDateTime>,
}

impl RawUrlSpec {
    fn route(route: RouteName) -> Self {
        Self {
            target: UrlTarget::Route {
                route,
                se_names: None,
            },
            change_frequency: ChangeFrequency::Weekly,
            last_modified: None,
        }
    }

    /// Spec for a slugged entity; `None` when no SE name can be derived.
    fn entity<E: SlugSupported + ?Sized>(
        route: RouteName,
        id: u32,
        entity: &E,
        last_modified: Option<OffsetDateTime>,
    ) -> Option<Self> {
        match SeNames::of(entity) {
            Ok(se_names) => Some(Self {
                target: UrlTarget::Route {
                    route,
                    se_names: Some(se_names),
                },
                change_frequency: ChangeFrequency::Weekly,
                last_modified,
            }),
            Err(err) => {
                warn!(
                    route = %route,
                    id,
                    name = entity.display_name(),
                    error = %err,
                    "Skipping sitemap entity without a usable se name"
                );
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SourceContext {
    pub store_id: u32,
}

#[async_trait]
pub trait UrlSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn list_entries(&self, ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError>;
}

/// Repositories the sitemap reads from.
#[derive(Clone)]
pub struct SitemapRepos {
    pub categories: Arc<dyn CategoriesRepo>,
    pub manufacturers: Arc<dyn ManufacturersRepo>,
    pub products: Arc<dyn ProductsRepo>,
    pub product_tags: Arc<dyn ProductTagsRepo>,
    pub topics: Arc<dyn TopicsRepo>,
    pub languages: Arc<dyn LanguagesRepo>,
}

/// Build the enabled sources in sitemap order.
pub fn assemble_sources(
    options: &SitemapOptions,
    repos: &SitemapRepos,
) -> Vec<Arc<dyn UrlSource>> {
    let mut sources: Vec<Arc<dyn UrlSource>> = vec![
        Arc::new(StaticRouteSource::new("home", RouteName::HomePage)),
        Arc::new(StaticRouteSource::new("search", RouteName::ProductSearch)),
        Arc::new(StaticRouteSource::new("contact", RouteName::ContactUs)),
    ];

    if options.news_enabled {
        sources.push(Arc::new(StaticRouteSource::new("news", RouteName::NewsArchive)));
    }
    if options.blog_enabled {
        sources.push(Arc::new(StaticRouteSource::new("blog", RouteName::Blog)));
    }
    if options.forums_enabled {
        sources.push(Arc::new(StaticRouteSource::new("forums", RouteName::Boards)));
    }
    if options.include_categories {
        sources.push(Arc::new(CategorySource::new(repos.categories.clone())));
    }
    if options.include_manufacturers {
        sources.push(Arc::new(ManufacturerSource::new(repos.manufacturers.clone())));
    }
    if options.include_products {
        sources.push(Arc::new(ProductSource::new(repos.products.clone())));
    }
    if options.include_product_tags {
        sources.push(Arc::new(ProductTagSource::new(repos.product_tags.clone())));
    }
    sources.push(Arc::new(TopicSource::new(repos.topics.clone())));
    if !options.custom_urls.is_empty() {
        sources.push(Arc::new(CustomUrlSource::new(options.custom_urls.clone())));
    }

    sources
}

pub struct StaticRouteSource {
    name: &'static str,
    route: RouteName,
}

impl StaticRouteSource {
    pub fn new(name: &'static str, route: RouteName) -> Self {
        Self { name, route }
    }
}

#[async_trait]
impl UrlSource for StaticRouteSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn list_entries(&self, _ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError> {
        Ok(vec![RawUrlSpec::route(self.route)])
    }
}

pub struct CategorySource {
    repo: Arc<dyn CategoriesRepo>,
}

impl CategorySource {
    pub fn new(repo: Arc<dyn CategoriesRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UrlSource for CategorySource {
    fn name(&self) -> &'static str {
        "categories"
    }

    async fn list_entries(&self, ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError> {
        let categories = self.repo.list_categories(ctx.store_id).await?;
        Ok(categories
            .iter()
            .filter_map(|category| {
                RawUrlSpec::entity(
                    RouteName::Category,
                    category.id,
                    category,
                    Some(category.updated_on),
                )
            })
            .collect())
    }
}

pub struct ManufacturerSource {
    repo: Arc<dyn ManufacturersRepo>,
}

impl ManufacturerSource {
    pub fn new(repo: Arc<dyn ManufacturersRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UrlSource for ManufacturerSource {
    fn name(&self) -> &'static str {
        "manufacturers"
    }

    async fn list_entries(&self, ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError> {
        let manufacturers = self.repo.list_manufacturers(ctx.store_id).await?;
        Ok(manufacturers
            .iter()
            .filter_map(|manufacturer| {
                RawUrlSpec::entity(
                    RouteName::Manufacturer,
                    manufacturer.id,
                    manufacturer,
                    Some(manufacturer.updated_on),
                )
            })
            .collect())
    }
}

pub struct ProductSource {
    repo: Arc<dyn ProductsRepo>,
}

impl ProductSource {
    pub fn new(repo: Arc<dyn ProductsRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UrlSource for ProductSource {
    fn name(&self) -> &'static str {
        "products"
    }

    async fn list_entries(&self, ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError> {
        let filter = ProductQueryFilter {
            store_id: Some(ctx.store_id),
            visible_individually_only: true,
            order_by: ProductSort::CreatedOn,
        };
        let products = self.repo.search_products(&filter).await?;
        Ok(products
            .iter()
            .filter_map(|product| {
                RawUrlSpec::entity(
                    RouteName::Product,
                    product.id,
                    product,
                    Some(product.updated_on),
                )
            })
            .collect())
    }
}

pub struct ProductTagSource {
    repo: Arc<dyn ProductTagsRepo>,
}

impl ProductTagSource {
    pub fn new(repo: Arc<dyn ProductTagsRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UrlSource for ProductTagSource {
    fn name(&self) -> &'static str {
        "product_tags"
    }

    async fn list_entries(&self, _ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError> {
        let tags = self.repo.list_product_tags().await?;
        Ok(tags
            .iter()
            .filter_map(|tag| RawUrlSpec::entity(RouteName::ProductsByTag, tag.id, tag, None))
            .collect())
    }
}

/// Topics flagged for inclusion; the flag is checked here, not in the repo.
pub struct TopicSource {
    repo: Arc<dyn TopicsRepo>,
}

impl TopicSource {
    pub fn new(repo: Arc<dyn TopicsRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UrlSource for TopicSource {
    fn name(&self) -> &'static str {
        "topics"
    }

    async fn list_entries(&self, ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError> {
        let topics = self.repo.list_topics(ctx.store_id).await?;
        Ok(topics
            .iter()
            .filter(|topic| topic.include_in_sitemap)
            .filter_map(|topic| RawUrlSpec::entity(RouteName::Topic, topic.id, topic, None))
            .collect())
    }
}

pub struct CustomUrlSource {
    urls: Vec<String>,
}

impl CustomUrlSource {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }
}

#[async_trait]
impl UrlSource for CustomUrlSource {
    fn name(&self) -> &'static str {
        "custom"
    }

    async fn list_entries(&self, _ctx: &SourceContext) -> Result<Vec<RawUrlSpec>, SitemapError> {
        Ok(self
            .urls
            .iter()
            .map(|url| RawUrlSpec {
                target: UrlTarget::Custom(url.clone()),
                change_frequency: ChangeFrequency::Weekly,
                last_modified: None,
            })
            .collect())
    }
}
