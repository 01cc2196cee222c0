//! Cache key conventions.
//!
//! The cache store itself lives outside this crate. Callers build concrete
//! keys with the typed helpers in [`catalog`] and [`gdpr`] and drop whole
//! families of entries through the matching `*_prefix` helpers:
//!
//! ```
//! use storefront::cache::catalog;
//!
//! let key = catalog::categories_by_parent(5, false, 42, 1);
//! assert!(key.starts_with(&catalog::categories_by_parent_prefix(5)));
//! ```

pub mod catalog;
pub mod gdpr;
mod keys;
mod registry;

pub use keys::{CacheKeyTemplate, KEY_NAMESPACE, id_list, ids_hash, interpolate};
pub use registry::CacheKeyRegistry;
