//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{net::SocketAddr, num::NonZeroUsize, path::PathBuf, str::FromStr};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

mod cli;

pub use cli::{CliArgs, Command, CommonOverrides, GenerateArgs, ServeArgs, ServeOverrides};

use crate::application::sitemap::MAX_URLS_PER_PAGE;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "storefront";
const ENV_PREFIX: &str = "STOREFRONT";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORE_ID: u32 = 1;
const DEFAULT_STORE_HOST: &str = "localhost:3000";
const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

/// Fully-resolved deployment settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub store: StoreSettings,
    pub security: SecuritySettings,
    pub localization: LocalizationSettings,
    pub features: FeatureSettings,
    pub sitemap: SitemapSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub id: u32,
    /// Public host, optionally with a port (`shop.example`, `localhost:3000`).
    pub host: String,
    /// `""` or a path starting with `/` and without a trailing slash.
    pub path_base: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SecuritySettings {
    pub force_ssl: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct LocalizationSettings {
    pub seo_friendly_urls_for_languages_enabled: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureSettings {
    pub news_enabled: bool,
    pub blog_enabled: bool,
    pub forums_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SitemapSettings {
    pub enabled: bool,
    pub include_categories: bool,
    pub include_manufacturers: bool,
    pub include_products: bool,
    pub include_product_tags: bool,
    pub custom_urls: Vec<String>,
    pub max_urls_per_page: NonZeroUsize,
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match cli.command.as_ref() {
        Some(Command::Serve(args)) => raw.apply_serve_overrides(&args.overrides),
        Some(Command::Generate(args)) => raw.apply_common_overrides(&args.overrides),
        None => raw.apply_serve_overrides(&ServeOverrides::default()),
    }

    Settings::from_raw(raw)
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    store: RawStoreSettings,
    security: RawSecuritySettings,
    localization: RawLocalizationSettings,
    features: RawFeatureSettings,
    sitemap: RawSitemapSettings,
    catalog: RawCatalogSettings,
}

impl RawSettings {
    fn apply_serve_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = overrides.server_host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.server_port {
            self.server.port = Some(port);
        }

        self.apply_common_overrides(&overrides.common);
    }

    fn apply_common_overrides(&mut self, overrides: &CommonOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(id) = overrides.store_id {
            self.store.id = Some(id);
        }
        if let Some(host) = overrides.store_host.as_ref() {
            self.store.host = Some(host.clone());
        }
        if let Some(path_base) = overrides.store_path_base.as_ref() {
            self.store.path_base = Some(path_base.clone());
        }
        if let Some(force_ssl) = overrides.force_ssl {
            self.security.force_ssl = Some(force_ssl);
        }
        if let Some(path) = overrides.catalog_path.as_ref() {
            self.catalog.path = Some(path.clone());
        }
        if let Some(max) = overrides.sitemap_max_urls_per_page {
            self.sitemap.max_urls_per_page = Some(max);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            server,
            logging,
            store,
            security,
            localization,
            features,
            sitemap,
            catalog,
        } = raw;

        Ok(Self {
            server: build_server_settings(server)?,
            logging: build_logging_settings(logging)?,
            store: build_store_settings(store)?,
            security: SecuritySettings {
                force_ssl: security.force_ssl.unwrap_or(false),
            },
            localization: LocalizationSettings {
                seo_friendly_urls_for_languages_enabled: localization
                    .seo_friendly_urls_for_languages_enabled
                    .unwrap_or(false),
            },
            features: FeatureSettings {
                news_enabled: features.news_enabled.unwrap_or(true),
                blog_enabled: features.blog_enabled.unwrap_or(true),
                forums_enabled: features.forums_enabled.unwrap_or(false),
            },
            sitemap: build_sitemap_settings(sitemap)?,
            catalog: build_catalog_settings(catalog)?,
        })
    }
}

fn build_server_settings(server: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid(
            "server.port",
            "port must be greater than zero",
        ));
    }

    let addr = parse_socket_addr(&host, port)
        .map_err(|reason| LoadError::invalid("server.addr", reason))?;

    Ok(ServerSettings { addr })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_store_settings(store: RawStoreSettings) -> Result<StoreSettings, LoadError> {
    let id = store.id.unwrap_or(DEFAULT_STORE_ID);

    let host = store
        .host
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| DEFAULT_STORE_HOST.to_string());
    if host.is_empty() {
        return Err(LoadError::invalid("store.host", "host must not be empty"));
    }
    let probe = Url::parse(&format!("http://{host}/"))
        .map_err(|err| LoadError::invalid("store.host", format!("invalid host `{host}`: {err}")))?;
    if probe.path() != "/" || probe.query().is_some() {
        return Err(LoadError::invalid(
            "store.host",
            "host must not carry a path or query; use store.path_base",
        ));
    }

    let path_base = normalize_path_base(store.path_base.as_deref().unwrap_or_default());
    if path_base.contains(['?', '#', ' ']) {
        return Err(LoadError::invalid(
            "store.path_base",
            format!("invalid path base `{path_base}`"),
        ));
    }

    Ok(StoreSettings {
        id,
        host,
        path_base,
    })
}

fn build_sitemap_settings(sitemap: RawSitemapSettings) -> Result<SitemapSettings, LoadError> {
    let max_value = sitemap
        .max_urls_per_page
        .unwrap_or(MAX_URLS_PER_PAGE.get());
    let max_urls_per_page = NonZeroUsize::new(max_value).ok_or_else(|| {
        LoadError::invalid("sitemap.max_urls_per_page", "must be greater than zero")
    })?;
    if max_urls_per_page > MAX_URLS_PER_PAGE {
        return Err(LoadError::invalid(
            "sitemap.max_urls_per_page",
            format!("must not exceed {MAX_URLS_PER_PAGE}"),
        ));
    }

    let custom_urls = sitemap
        .custom_urls
        .unwrap_or_default()
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect();

    Ok(SitemapSettings {
        enabled: sitemap.enabled.unwrap_or(true),
        include_categories: sitemap.include_categories.unwrap_or(true),
        include_manufacturers: sitemap.include_manufacturers.unwrap_or(true),
        include_products: sitemap.include_products.unwrap_or(true),
        include_product_tags: sitemap.include_product_tags.unwrap_or(true),
        custom_urls,
        max_urls_per_page,
    })
}

fn build_catalog_settings(catalog: RawCatalogSettings) -> Result<CatalogSettings, LoadError> {
    let path = catalog
        .path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));
    if path.as_os_str().is_empty() {
        return Err(LoadError::invalid("catalog.path", "path must not be empty"));
    }
    Ok(CatalogSettings { path })
}

/// `"/shop/"` → `"/shop"`, `"shop"` → `"/shop"`, `"/"` → `""`.
fn normalize_path_base(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawStoreSettings {
    id: Option<u32>,
    host: Option<String>,
    path_base: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSecuritySettings {
    force_ssl: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLocalizationSettings {
    seo_friendly_urls_for_languages_enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawFeatureSettings {
    news_enabled: Option<bool>,
    blog_enabled: Option<bool>,
    forums_enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSitemapSettings {
    enabled: Option<bool>,
    include_categories: Option<bool>,
    include_manufacturers: Option<bool>,
    include_products: Option<bool>,
    include_product_tags: Option<bool>,
    custom_urls: Option<Vec<String>>,
    max_urls_per_page: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCatalogSettings {
    path: Option<PathBuf>,
}

fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let candidate = format!("{host}:{port}");
    candidate
        .parse()
        .map_err(|err| format!("invalid address `{candidate}`: {err}"))
}

#[cfg(test)]
mod tests;
