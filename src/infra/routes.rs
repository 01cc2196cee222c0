//! Route table mapping named routes onto the store's public URLs.

use url::Url;

use crate::application::routing::{RouteError, RouteParams, RouteResolver, Scheme};
use crate::config::StoreSettings;
use crate::domain::types::RouteName;

/// Path template for a route, relative to the path base.
fn template(route: RouteName) -> &'static str {
    match route {
        RouteName::HomePage => "/",
        RouteName::ProductSearch => "/search",
        RouteName::ContactUs => "/contactus",
        RouteName::NewsArchive => "/news",
        RouteName::Blog => "/blog",
        RouteName::Boards => "/boards",
        RouteName::Category
        | RouteName::Manufacturer
        | RouteName::Product
        | RouteName::ProductsByTag
        | RouteName::Topic => "/{se_name}",
        RouteName::Sitemap => "/sitemap.xml",
        RouteName::SitemapIndexed => "/sitemap/{id}.xml",
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    host: String,
    path_base: String,
}

impl RouteTable {
    pub fn new(host: impl Into<String>, path_base: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path_base: path_base.into(),
        }
    }

    pub fn from_settings(store: &StoreSettings) -> Self {
        Self::new(store.host.clone(), store.path_base.clone())
    }

    fn expand(route: RouteName, params: &RouteParams) -> Result<String, RouteError> {
        let mut path = template(route).to_string();
        if route.requires_se_name() {
            let se_name = params
                .se_name
                .as_deref()
                .filter(|value| !value.is_empty())
                .ok_or(RouteError::MissingParameter {
                    route,
                    parameter: "se_name",
                })?;
            path = path.replace("{se_name}", se_name);
        }
        if path.contains("{id}") {
            let id = params.id.ok_or(RouteError::MissingParameter {
                route,
                parameter: "id",
            })?;
            path = path.replace("{id}", &id.to_string());
        }
        Ok(path)
    }
}

impl RouteResolver for RouteTable {
    fn route_url(
        &self,
        route: RouteName,
        params: &RouteParams,
        scheme: Scheme,
    ) -> Result<String, RouteError> {
        let path = Self::expand(route, params)?;
        let candidate = format!(
            "{}://{}{}{}",
            scheme.as_str(),
            self.host,
            self.path_base,
            path
        );
        Url::parse(&candidate)
            .map(String::from)
            .map_err(|err| RouteError::InvalidUrl {
                route,
                url: candidate,
                reason: err.to_string(),
            })
    }

    fn path_base(&self) -> &str {
        &self.path_base
    }

    fn store_location(&self, scheme: Scheme) -> String {
        format!("{}://{}{}/", scheme.as_str(), self.host, self.path_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_routes_resolve_under_path_base() {
        let table = RouteTable::new("shop.example", "/shop");

        let home = table
            .route_url(RouteName::HomePage, &RouteParams::none(), Scheme::Https)
            .expect("home");
        assert_eq!(home, "https://shop.example/shop/");

        let contact = table
            .route_url(RouteName::ContactUs, &RouteParams::none(), Scheme::Http)
            .expect("contact");
        assert_eq!(contact, "http://shop.example/shop/contactus");
    }

    #[test]
    fn entity_routes_need_se_name() {
        let table = RouteTable::new("shop.example", "");

        let product = table
            .route_url(
                RouteName::Product,
                &RouteParams::se_name("red-shoes"),
                Scheme::Https,
            )
            .expect("product");
        assert_eq!(product, "https://shop.example/red-shoes");

        let err = table
            .route_url(RouteName::Product, &RouteParams::none(), Scheme::Https)
            .expect_err("missing se name");
        assert_eq!(
            err,
            RouteError::MissingParameter {
                route: RouteName::Product,
                parameter: "se_name",
            }
        );
    }

    #[test]
    fn se_name_requirement_follows_route_kind() {
        let table = RouteTable::new("shop.example", "");
        for route in [
            RouteName::HomePage,
            RouteName::ProductSearch,
            RouteName::ContactUs,
            RouteName::NewsArchive,
            RouteName::Blog,
            RouteName::Boards,
            RouteName::Category,
            RouteName::Manufacturer,
            RouteName::Product,
            RouteName::ProductsByTag,
            RouteName::Topic,
            RouteName::Sitemap,
        ] {
            let resolved = table.route_url(route, &RouteParams::none(), Scheme::Http);
            assert_eq!(resolved.is_err(), route.requires_se_name(), "{route}");
        }
    }

    #[test]
    fn se_names_are_percent_encoded() {
        let table = RouteTable::new("shop.example", "");
        let url = table
            .route_url(RouteName::Topic, &RouteParams::se_name("über uns"), Scheme::Https)
            .expect("topic");
        assert_eq!(url, "https://shop.example/%C3%BCber%20uns");
    }

    #[test]
    fn numbered_sitemap_and_store_location() {
        let table = RouteTable::new("localhost:3000", "");
        let url = table
            .route_url(RouteName::SitemapIndexed, &RouteParams::id(2), Scheme::Http)
            .expect("sitemap page");
        assert_eq!(url, "http://localhost:3000/sitemap/2.xml");
        assert_eq!(table.store_location(Scheme::Http), "http://localhost:3000/");
    }
}
