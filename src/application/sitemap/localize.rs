//! Turns raw URL specs into absolute, optionally localized sitemap entries.

use time::OffsetDateTime;
use tracing::warn;
use url::Url;

use crate::application::routing::{
    RouteError, RouteParams, RouteResolver, Scheme, add_language_seo_code, localized_language,
    remove_language_seo_code,
};
use crate::domain::entities::LanguageRecord;
use crate::domain::types::RouteName;

use super::SitemapError;
use super::entry::{AlternateLocation, SitemapEntry};
use super::sources::{RawUrlSpec, SeNames, UrlTarget};

pub struct UrlLocalizer<'a> {
    routes: &'a dyn RouteResolver,
    scheme: Scheme,
    /// `None` disables per-language URLs.
    languages: Option<&'a [LanguageRecord]>,
}

impl<'a> UrlLocalizer<'a> {
    pub fn new(
        routes: &'a dyn RouteResolver,
        scheme: Scheme,
        languages: Option<&'a [LanguageRecord]>,
    ) -> Self {
        Self {
            routes,
            scheme,
            languages,
        }
    }

    /// Resolve `spec`; `Ok(None)` drops custom URLs outside the store.
    pub fn entry(
        &self,
        spec: &RawUrlSpec,
        now: OffsetDateTime,
    ) -> Result<Option<SitemapEntry>, SitemapError> {
        let last_modified = spec.last_modified.unwrap_or(now);
        match &spec.target {
            UrlTarget::Custom(value) => Ok(self.custom_url(value).map(|location| {
                SitemapEntry::new(location, spec.change_frequency, last_modified)
            })),
            UrlTarget::Route { route, se_names } => {
                let params = route_params(se_names.as_ref(), None);
                let location = self.routes.route_url(*route, &params, self.scheme)?;
                let alternates = match self.languages {
                    Some(languages) if !languages.is_empty() => {
                        self.alternates(*route, se_names.as_ref(), languages)?
                    }
                    _ => Vec::new(),
                };
                Ok(Some(
                    SitemapEntry::new(location, spec.change_frequency, last_modified)
                        .with_alternates(alternates),
                ))
            }
        }
    }

    fn alternates(
        &self,
        route: RouteName,
        se_names: Option<&SeNames>,
        languages: &[LanguageRecord],
    ) -> Result<Vec<AlternateLocation>, SitemapError> {
        let path_base = self.routes.path_base();
        languages
            .iter()
            .map(|language| {
                let params = route_params(se_names, Some(&language.unique_seo_code));
                let url = self.routes.route_url(route, &params, self.scheme)?;
                let mut parsed = Url::parse(&url).map_err(|err| RouteError::InvalidUrl {
                    route,
                    url: url.clone(),
                    reason: err.to_string(),
                })?;

                let stripped = remove_language_seo_code(parsed.path(), path_base, languages);
                let localized =
                    add_language_seo_code(&stripped, path_base, &language.unique_seo_code);
                parsed.set_path(&localized);

                let hreflang = localized_language(parsed.path(), path_base, languages)
                    .map(|found| found.unique_seo_code.clone());
                Ok(AlternateLocation {
                    href: parsed.to_string(),
                    hreflang,
                })
            })
            .collect()
    }

    /// Relative values are joined to the store root. Absolute URLs must
    /// point inside the store; they take the store's scheme.
    fn custom_url(&self, value: &str) -> Option<String> {
        let store_location = self.routes.store_location(self.scheme);
        let mut parsed = match Url::parse(value) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            _ => {
                return Some(format!(
                    "{store_location}{}",
                    value.trim_start_matches('/')
                ));
            }
        };

        let inside_store = Url::parse(&store_location)
            .map(|store| {
                parsed.host_str() == store.host_str()
                    && parsed.port() == store.port()
                    && parsed.path().starts_with(store.path())
            })
            .unwrap_or(false);
        if !inside_store || parsed.set_scheme(self.scheme.as_str()).is_err() {
            warn!(
                url = value,
                store = %store_location,
                "Skipping custom sitemap url outside the store"
            );
            return None;
        }
        Some(parsed.to_string())
    }
}

fn route_params(se_names: Option<&SeNames>, seo_code: Option<&str>) -> RouteParams {
    match se_names {
        Some(names) => RouteParams::se_name(names.for_language(seo_code)),
        None => RouteParams::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use time::macros::datetime;

    use super::*;
    use crate::domain::types::ChangeFrequency;

    struct FixedRoutes;

    impl RouteResolver for FixedRoutes {
        fn route_url(
            &self,
            route: RouteName,
            params: &RouteParams,
            scheme: Scheme,
        ) -> Result<String, RouteError> {
            let path = match (route, params.se_name.as_deref()) {
                (RouteName::HomePage, _) => String::new(),
                (_, Some(se_name)) => se_name.to_string(),
                (route, None) => {
                    return Err(RouteError::MissingParameter {
                        route,
                        parameter: "se_name",
                    });
                }
            };
            Ok(format!("{}://shop.example/shop/{path}", scheme.as_str()))
        }

        fn path_base(&self) -> &str {
            "/shop"
        }

        fn store_location(&self, scheme: Scheme) -> String {
            format!("{}://shop.example/shop/", scheme.as_str())
        }
    }

    fn language(id: u32, code: &str) -> LanguageRecord {
        LanguageRecord {
            id,
            name: code.to_string(),
            unique_seo_code: code.to_string(),
            published: true,
            display_order: id as i32,
            limited_to_stores: false,
            store_ids: Vec::new(),
        }
    }

    fn category_spec() -> RawUrlSpec {
        RawUrlSpec {
            target: UrlTarget::Route {
                route: RouteName::Category,
                se_names: Some(SeNames {
                    default: "shoes".to_string(),
                    localized: BTreeMap::from([("de".to_string(), "schuhe".to_string())]),
                }),
            },
            change_frequency: ChangeFrequency::Weekly,
            last_modified: Some(datetime!(2024-01-02 00:00 UTC)),
        }
    }

    #[test]
    fn without_languages_only_location_is_set() {
        let routes = FixedRoutes;
        let localizer = UrlLocalizer::new(&routes, Scheme::Https, None);
        let entry = localizer
            .entry(&category_spec(), datetime!(2024-06-01 00:00 UTC))
            .expect("entry")
            .expect("route entries are always kept");

        assert_eq!(entry.location, "https://shop.example/shop/shoes");
        assert!(entry.alternate_locations.is_empty());
        assert_eq!(entry.last_modified, datetime!(2024-01-02 00:00 UTC));
    }

    #[test]
    fn localizes_per_language_with_localized_names() {
        let routes = FixedRoutes;
        let languages = vec![language(1, "en"), language(2, "de")];
        let localizer = UrlLocalizer::new(&routes, Scheme::Https, Some(&languages));
        let entry = localizer
            .entry(&category_spec(), datetime!(2024-06-01 00:00 UTC))
            .expect("entry")
            .expect("route entries are always kept");

        assert_eq!(entry.location, "https://shop.example/shop/shoes");
        assert_eq!(
            entry.alternate_locations,
            vec![
                AlternateLocation {
                    href: "https://shop.example/shop/en/shoes".to_string(),
                    hreflang: Some("en".to_string()),
                },
                AlternateLocation {
                    href: "https://shop.example/shop/de/schuhe".to_string(),
                    hreflang: Some("de".to_string()),
                },
            ]
        );
    }

    #[test]
    fn home_page_gets_code_as_trailing_segment() {
        let routes = FixedRoutes;
        let languages = vec![language(1, "en")];
        let localizer = UrlLocalizer::new(&routes, Scheme::Http, Some(&languages));
        let spec = RawUrlSpec {
            target: UrlTarget::Route {
                route: RouteName::HomePage,
                se_names: None,
            },
            change_frequency: ChangeFrequency::Weekly,
            last_modified: None,
        };
        let now = datetime!(2024-06-01 00:00 UTC);
        let entry = localizer
            .entry(&spec, now)
            .expect("entry")
            .expect("route entries are always kept");

        assert_eq!(entry.alternate_locations[0].href, "http://shop.example/shop/en/");
        assert_eq!(entry.last_modified, now);
    }

    #[test]
    fn custom_urls_are_joined_and_never_localized() {
        let routes = FixedRoutes;
        let languages = vec![language(1, "en"), language(2, "de")];
        let localizer = UrlLocalizer::new(&routes, Scheme::Https, Some(&languages));
        let now = datetime!(2024-06-01 00:00 UTC);

        let entry = localizer
            .entry(&custom("/promo/summer"), now)
            .expect("entry")
            .expect("relative url kept");
        assert_eq!(entry.location, "https://shop.example/shop/promo/summer");
        assert!(entry.alternate_locations.is_empty());
    }

    fn custom(value: &str) -> RawUrlSpec {
        RawUrlSpec {
            target: UrlTarget::Custom(value.to_string()),
            change_frequency: ChangeFrequency::Weekly,
            last_modified: None,
        }
    }

    #[test]
    fn absolute_custom_urls_take_store_scheme() {
        let routes = FixedRoutes;
        let localizer = UrlLocalizer::new(&routes, Scheme::Https, None);
        let now = datetime!(2024-06-01 00:00 UTC);

        let entry = localizer
            .entry(&custom("http://shop.example/shop/promo?week=1"), now)
            .expect("entry")
            .expect("store url kept");
        assert_eq!(entry.location, "https://shop.example/shop/promo?week=1");
    }

    #[test]
    fn absolute_custom_urls_outside_store_are_dropped() {
        let routes = FixedRoutes;
        let localizer = UrlLocalizer::new(&routes, Scheme::Https, None);
        let now = datetime!(2024-06-01 00:00 UTC);

        for foreign in [
            "https://blog.example/",
            "http://elsewhere.example/x",
            "https://shop.example:8443/shop/promo",
            "https://shop.example/other/promo",
        ] {
            let entry = localizer.entry(&custom(foreign), now).expect("entry");
            assert!(entry.is_none(), "{foreign} should be dropped");
        }
    }

    #[test]
    fn missing_se_name_surfaces_route_error() {
        let routes = FixedRoutes;
        let localizer = UrlLocalizer::new(&routes, Scheme::Https, None);
        let spec = RawUrlSpec {
            target: UrlTarget::Route {
                route: RouteName::Topic,
                se_names: None,
            },
            change_frequency: ChangeFrequency::Weekly,
            last_modified: None,
        };

        let err = localizer
            .entry(&spec, datetime!(2024-06-01 00:00 UTC))
            .expect_err("topic without se name");
        assert!(matches!(
            err,
            SitemapError::Route(RouteError::MissingParameter { .. })
        ));
    }
}
