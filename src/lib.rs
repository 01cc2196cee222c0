//! Catalog cache-key conventions and XML sitemap generation for a storefront.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
