//! Sitemap service for sitemap.xml, numbered sitemap pages and robots.txt.
//!
//! URLs are collected from the enabled [`UrlSource`]s in a fixed order,
//! resolved to absolute (optionally localized) locations, then split into
//! pages of at most `max_urls_per_page` entries. When everything fits on one
//! page the root document is a `urlset`; otherwise it is a `sitemapindex`
//! pointing at the numbered pages.

mod entry;
mod localize;
mod paginate;
mod sources;
mod writer;

use std::io::Write;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::application::repos::RepoError;
use crate::application::routing::{RouteError, RouteParams, RouteResolver, Scheme};
use crate::config::Settings;
use crate::domain::types::RouteName;

pub use entry::{AlternateLocation, SitemapEntry, SitemapReference};
pub use localize::UrlLocalizer;
pub use paginate::{page_count, paginate, take_page};
pub use sources::{
    CategorySource, CustomUrlSource, ManufacturerSource, ProductSource, ProductTagSource,
    RawUrlSpec, SeNames, SitemapRepos, SourceContext, StaticRouteSource, TopicSource, UrlSource,
    UrlTarget, assemble_sources,
};
pub use writer::{format_lastmod, write_index, write_urlset};

pub const METRIC_SITEMAP_GENERATED_TOTAL: &str = "storefront_sitemap_generated_total";
pub const METRIC_SITEMAP_URLS: &str = "storefront_sitemap_urls";
pub const METRIC_SITEMAP_GENERATE_MS: &str = "storefront_sitemap_generate_ms";

/// Upper bound of URLs in one sitemap file set by the sitemaps protocol.
pub const MAX_URLS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(50_000) {
    Some(value) => value,
    None => unreachable!(),
};

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("sitemap generation is disabled")]
    Disabled,
    #[error("failed to load catalog data: {0}")]
    Repo(#[from] RepoError),
    #[error("failed to resolve url: {0}")]
    Route(#[from] RouteError),
    #[error("{pages} sitemap pages exceed what an index can number")]
    TooManyPages { pages: usize },
    #[error("failed to write sitemap: {0}")]
    Io(#[from] std::io::Error),
}

/// Switches and limits driving one store's sitemap.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    pub enabled: bool,
    pub store_id: u32,
    pub force_ssl: bool,
    pub localized_urls: bool,
    pub news_enabled: bool,
    pub blog_enabled: bool,
    pub forums_enabled: bool,
    pub include_categories: bool,
    pub include_manufacturers: bool,
    pub include_products: bool,
    pub include_product_tags: bool,
    pub custom_urls: Vec<String>,
    pub max_urls_per_page: NonZeroUsize,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            store_id: 1,
            force_ssl: false,
            localized_urls: false,
            news_enabled: true,
            blog_enabled: true,
            forums_enabled: false,
            include_categories: true,
            include_manufacturers: true,
            include_products: true,
            include_product_tags: true,
            custom_urls: Vec::new(),
            max_urls_per_page: MAX_URLS_PER_PAGE,
        }
    }
}

impl From<&Settings> for SitemapOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            enabled: settings.sitemap.enabled,
            store_id: settings.store.id,
            force_ssl: settings.security.force_ssl,
            localized_urls: settings.localization.seo_friendly_urls_for_languages_enabled,
            news_enabled: settings.features.news_enabled,
            blog_enabled: settings.features.blog_enabled,
            forums_enabled: settings.features.forums_enabled,
            include_categories: settings.sitemap.include_categories,
            include_manufacturers: settings.sitemap.include_manufacturers,
            include_products: settings.sitemap.include_products,
            include_product_tags: settings.sitemap.include_product_tags,
            custom_urls: settings.sitemap.custom_urls.clone(),
            max_urls_per_page: settings.sitemap.max_urls_per_page,
        }
    }
}

/// A rendered-to-be sitemap file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDocument {
    Index(Vec<SitemapReference>),
    UrlSet(Vec<SitemapEntry>),
}

impl SitemapDocument {
    pub fn kind(&self) -> &'static str {
        match self {
            SitemapDocument::Index(_) => "index",
            SitemapDocument::UrlSet(_) => "urlset",
        }
    }

    /// Sitemaps in an index, entries in a urlset.
    pub fn len(&self) -> usize {
        match self {
            SitemapDocument::Index(sitemaps) => sitemaps.len(),
            SitemapDocument::UrlSet(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_xml(&self) -> String {
        match self {
            SitemapDocument::Index(sitemaps) => write_index(sitemaps),
            SitemapDocument::UrlSet(entries) => write_urlset(entries),
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(self.to_xml().as_bytes())?;
        out.flush()
    }
}

#[derive(Clone)]
pub struct SitemapService {
    repos: SitemapRepos,
    routes: Arc<dyn RouteResolver>,
    options: Arc<SitemapOptions>,
}

impl SitemapService {
    pub fn new(
        repos: SitemapRepos,
        routes: Arc<dyn RouteResolver>,
        options: SitemapOptions,
    ) -> Self {
        Self {
            repos,
            routes,
            options: Arc::new(options),
        }
    }

    pub fn options(&self) -> &SitemapOptions {
        &self.options
    }

    fn scheme(&self) -> Scheme {
        Scheme::from_force_ssl(self.options.force_ssl)
    }

    /// Build the root document (`page = None`) or a numbered page.
    ///
    /// Returns `Ok(None)` when there is nothing to serve: no URLs at all,
    /// page 0, or a page past the last one.
    pub async fn generate(
        &self,
        page: Option<u32>,
    ) -> Result<Option<SitemapDocument>, SitemapError> {
        self.generate_at(page, OffsetDateTime::now_utc()).await
    }

    /// Same as [`generate`](Self::generate) with an explicit generation time.
    #[instrument(skip(self, now), fields(store_id = self.options.store_id))]
    pub async fn generate_at(
        &self,
        page: Option<u32>,
        now: OffsetDateTime,
    ) -> Result<Option<SitemapDocument>, SitemapError> {
        if !self.options.enabled {
            return Err(SitemapError::Disabled);
        }

        let started_at = Instant::now();
        let entries = self.collect_entries(now).await?;
        let page_size = self.options.max_urls_per_page;
        let total = entries.len();

        let document = match page {
            None if entries.is_empty() => None,
            None if total > page_size.get() => {
                let pages = page_count(total, page_size);
                Some(SitemapDocument::Index(self.index_references(pages, now)?))
            }
            None => Some(SitemapDocument::UrlSet(entries)),
            Some(number) => {
                take_page(paginate(entries, page_size), number).map(SitemapDocument::UrlSet)
            }
        };

        histogram!(METRIC_SITEMAP_GENERATE_MS)
            .record(started_at.elapsed().as_secs_f64() * 1000.0);

        match &document {
            Some(document) => {
                counter!(METRIC_SITEMAP_GENERATED_TOTAL, "kind" => document.kind()).increment(1);
                histogram!(METRIC_SITEMAP_URLS).record(total as f64);
                info!(
                    kind = document.kind(),
                    items = document.len(),
                    total_urls = total,
                    "Sitemap generated"
                );
            }
            None => debug!(total_urls = total, "No sitemap document for request"),
        }

        Ok(document)
    }

    /// Generate and write the document; returns `false` when there was nothing to write.
    pub async fn write<W: Write>(
        &self,
        page: Option<u32>,
        mut out: W,
    ) -> Result<bool, SitemapError> {
        match self.generate(page).await? {
            Some(document) => {
                document.write_to(&mut out)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// robots.txt body; advertises the sitemap only while it is enabled.
    pub fn robots_txt(&self) -> Result<String, SitemapError> {
        let mut body = String::from("User-agent: *\nAllow: /\n");
        if self.options.enabled {
            let url = self
                .routes
                .route_url(RouteName::Sitemap, &RouteParams::none(), self.scheme())?;
            body.push_str(&format!("Sitemap: {url}\n"));
        }
        Ok(body)
    }

    async fn collect_entries(
        &self,
        now: OffsetDateTime,
    ) -> Result<Vec<SitemapEntry>, SitemapError> {
        let ctx = SourceContext {
            store_id: self.options.store_id,
        };
        let languages = if self.options.localized_urls {
            Some(self.repos.languages.list_languages(ctx.store_id).await?)
        } else {
            None
        };
        let localizer =
            UrlLocalizer::new(self.routes.as_ref(), self.scheme(), languages.as_deref());

        let mut entries = Vec::new();
        for source in assemble_sources(&self.options, &self.repos) {
            let specs = source.list_entries(&ctx).await?;
            debug!(source = source.name(), urls = specs.len(), "Collected sitemap urls");
            for spec in &specs {
                entries.extend(localizer.entry(spec, now)?);
            }
        }
        Ok(entries)
    }

    fn index_references(
        &self,
        pages: usize,
        now: OffsetDateTime,
    ) -> Result<Vec<SitemapReference>, SitemapError> {
        page_numbers(pages)?
            .map(|id| {
                let location = self.routes.route_url(
                    RouteName::SitemapIndexed,
                    &RouteParams::id(id),
                    self.scheme(),
                )?;
                Ok(SitemapReference {
                    location,
                    last_modified: now,
                })
            })
            .collect()
    }
}

/// 1-based page numbers as they appear in `/sitemap/{N}.xml`.
fn page_numbers(pages: usize) -> Result<RangeInclusive<u32>, SitemapError> {
    let last = u32::try_from(pages).map_err(|_| SitemapError::TooManyPages { pages })?;
    Ok(1..=last)
}
