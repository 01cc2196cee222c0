//! Application services: repository contracts, routing and the sitemap service.

pub mod error;
pub mod repos;
pub mod routing;
pub mod sitemap;
