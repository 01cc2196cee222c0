//! Repository traits describing catalog data sources.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{
    CategoryRecord, LanguageRecord, ManufacturerRecord, ProductRecord, ProductTagRecord,
    TopicRecord,
};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Position,
    CreatedOn,
    Name,
}

#[derive(Debug, Clone, Default)]
pub struct ProductQueryFilter {
    /// `None` searches every store.
    pub store_id: Option<u32>,
    pub visible_individually_only: bool,
    pub order_by: ProductSort,
}

/// Categories visible in a store (published, not deleted).
#[async_trait]
pub trait CategoriesRepo: Send + Sync {
    async fn list_categories(&self, store_id: u32) -> Result<Vec<CategoryRecord>, RepoError>;
}

#[async_trait]
pub trait ManufacturersRepo: Send + Sync {
    async fn list_manufacturers(&self, store_id: u32)
    -> Result<Vec<ManufacturerRecord>, RepoError>;
}

#[async_trait]
pub trait ProductsRepo: Send + Sync {
    async fn search_products(
        &self,
        filter: &ProductQueryFilter,
    ) -> Result<Vec<ProductRecord>, RepoError>;
}

#[async_trait]
pub trait ProductTagsRepo: Send + Sync {
    async fn list_product_tags(&self) -> Result<Vec<ProductTagRecord>, RepoError>;
}

#[async_trait]
pub trait TopicsRepo: Send + Sync {
    async fn list_topics(&self, store_id: u32) -> Result<Vec<TopicRecord>, RepoError>;
}

#[async_trait]
pub trait LanguagesRepo: Send + Sync {
    /// Published languages available in `store_id`, ordered for display.
    async fn list_languages(&self, store_id: u32) -> Result<Vec<LanguageRecord>, RepoError>;
}
