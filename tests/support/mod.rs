#![allow(dead_code)]

use std::num::NonZeroUsize;
use std::sync::Arc;

use storefront::application::sitemap::{SitemapOptions, SitemapService};
use storefront::infra::catalog::FileCatalog;
use storefront::infra::routes::RouteTable;
use time::OffsetDateTime;
use time::macros::datetime;

pub const CATALOG: &str = r#"
[[languages]]
id = 1
name = "English"
unique_seo_code = "en"
display_order = 1

[[languages]]
id = 2
name = "Deutsch"
unique_seo_code = "de"
display_order = 2

[[categories]]
id = 10
name = "Shoes"
localized_se_names = { de = "schuhe" }
updated_on = "2024-01-10T08:00:00Z"

[[categories]]
id = 11
name = "Hats"
updated_on = "2024-01-11T08:00:00Z"

[[manufacturers]]
id = 20
name = "Acme Corporation"
se_name = "acme"
updated_on = "2024-02-01T08:00:00Z"

[[products]]
id = 30
name = "Boot"
created_on = "2024-03-02T00:00:00Z"
updated_on = "2024-04-02T00:00:00Z"

[[products]]
id = 31
name = "Sandal"
created_on = "2024-03-01T00:00:00Z"
updated_on = "2024-04-01T00:00:00Z"

[[products]]
id = 32
name = "Spare laces"
visible_individually = false
created_on = "2024-03-03T00:00:00Z"
updated_on = "2024-04-03T00:00:00Z"

[[product_tags]]
id = 40
name = "sale"

[[topics]]
id = 50
system_name = "AboutUs"
title = "About us"
se_name = "about-us"
include_in_sitemap = true

[[topics]]
id = 51
system_name = "PrivacyInfo"
title = "Privacy notice"
include_in_sitemap = false

[[topics]]
id = 52
system_name = "ShippingInfo"
title = "Shipping"
se_name = "shipping"
include_in_sitemap = true
"#;

pub const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

pub fn catalog() -> FileCatalog {
    FileCatalog::from_toml_str(CATALOG).expect("fixture catalog is valid")
}

pub fn options() -> SitemapOptions {
    SitemapOptions {
        forums_enabled: false,
        custom_urls: vec!["/promo/summer".to_string()],
        ..SitemapOptions::default()
    }
}

/// Options leaving exactly seven urls: five static pages and two topics.
pub fn seven_url_options(page_size: usize) -> SitemapOptions {
    SitemapOptions {
        include_categories: false,
        include_manufacturers: false,
        include_products: false,
        include_product_tags: false,
        custom_urls: Vec::new(),
        max_urls_per_page: NonZeroUsize::new(page_size).expect("non-zero page size"),
        ..options()
    }
}

pub fn service(options: SitemapOptions) -> SitemapService {
    service_with(&catalog(), options)
}

pub fn service_with(catalog: &FileCatalog, options: SitemapOptions) -> SitemapService {
    SitemapService::new(
        catalog.sitemap_repos(),
        Arc::new(RouteTable::new("shop.example", "")),
        options,
    )
}
