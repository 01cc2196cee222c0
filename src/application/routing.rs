//! Route resolution contract and language SEO-code path helpers.

use thiserror::Error;

use crate::domain::entities::LanguageRecord;
use crate::domain::types::RouteName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn from_force_ssl(force_ssl: bool) -> Self {
        if force_ssl { Scheme::Https } else { Scheme::Http }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub se_name: Option<String>,
    pub id: Option<u32>,
}

impl RouteParams {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn se_name(value: impl Into<String>) -> Self {
        Self {
            se_name: Some(value.into()),
            id: None,
        }
    }

    pub fn id(value: u32) -> Self {
        Self {
            se_name: None,
            id: Some(value),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route `{route}` requires parameter `{parameter}`")]
    MissingParameter {
        route: RouteName,
        parameter: &'static str,
    },
    #[error("route `{route}` produced an invalid url `{url}`: {reason}")]
    InvalidUrl {
        route: RouteName,
        url: String,
        reason: String,
    },
}

/// Maps named routes to absolute URLs.
pub trait RouteResolver: Send + Sync {
    fn route_url(
        &self,
        route: RouteName,
        params: &RouteParams,
        scheme: Scheme,
    ) -> Result<String, RouteError>;

    /// Application path prefix every route is mounted under (`""` at the root).
    fn path_base(&self) -> &str;

    /// Absolute store root with a trailing slash, e.g. `https://shop.example/`.
    fn store_location(&self, scheme: Scheme) -> String;
}

/// Return the part of `path` that follows `path_base`.
fn after_path_base<'a>(path: &'a str, path_base: &str) -> &'a str {
    let base = path_base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') => rest,
        _ => path,
    }
}

/// Language whose SEO code is the first segment of `path` after the path base.
pub fn localized_language<'a>(
    path: &str,
    path_base: &str,
    languages: &'a [LanguageRecord],
) -> Option<&'a LanguageRecord> {
    let rest = after_path_base(path, path_base).trim_start_matches('/');
    let segment = rest.split(['/', '?']).next().unwrap_or_default();
    if segment.is_empty() {
        return None;
    }
    languages.iter().find(|language| {
        !language.unique_seo_code.is_empty()
            && language.unique_seo_code.eq_ignore_ascii_case(segment)
    })
}

/// Drop a leading language SEO code from `path`, keeping the path base.
pub fn remove_language_seo_code(
    path: &str,
    path_base: &str,
    languages: &[LanguageRecord],
) -> String {
    let Some(language) = localized_language(path, path_base, languages) else {
        return path.to_string();
    };

    let base = path_base.trim_end_matches('/');
    let rest = after_path_base(path, path_base).trim_start_matches('/');
    let remainder = &rest[language.unique_seo_code.len()..];
    if remainder.starts_with('/') {
        format!("{base}{remainder}")
    } else {
        format!("{base}/{remainder}")
    }
}

/// Insert `seo_code` as the first segment after the path base.
pub fn add_language_seo_code(path: &str, path_base: &str, seo_code: &str) -> String {
    let base = path_base.trim_end_matches('/');
    let rest = after_path_base(path, path_base).trim_start_matches('/');
    if seo_code.is_empty() {
        return format!("{base}/{rest}");
    }
    if rest.is_empty() {
        format!("{base}/{seo_code}/")
    } else {
        format!("{base}/{seo_code}/{rest}")
    }
}
