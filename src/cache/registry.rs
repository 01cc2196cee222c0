//! Lookup table over every cache key template.
//!
//! Used by invalidation tooling to find templates by name and to work out
//! which prefix families a concrete key belongs to.

use std::collections::HashMap;

use super::keys::CacheKeyTemplate;
use super::{catalog, gdpr};

pub struct CacheKeyRegistry {
    templates: Vec<&'static CacheKeyTemplate>,
    by_name: HashMap<&'static str, usize>,
}

impl CacheKeyRegistry {
    /// Registry over the catalog and GDPR tables.
    pub fn new() -> Self {
        Self::from_tables(&[catalog::ALL, gdpr::ALL])
    }

    pub fn from_tables(tables: &[&'static [CacheKeyTemplate]]) -> Self {
        let templates: Vec<&'static CacheKeyTemplate> =
            tables.iter().copied().flat_map(|table| table.iter()).collect();
        let by_name = templates
            .iter()
            .enumerate()
            .map(|(index, template)| (template.name, index))
            .collect();
        Self { templates, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'static CacheKeyTemplate> {
        self.by_name.get(name).map(|&index| self.templates[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CacheKeyTemplate> + '_ {
        self.templates.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates whose prefix family could have produced `key`.
    ///
    /// Only the literal part of each prefix (up to its first placeholder)
    /// is compared, so the result is a superset for parameterized prefixes.
    pub fn families_of(&self, key: &str) -> Vec<&'static CacheKeyTemplate> {
        self.templates
            .iter()
            .copied()
            .filter(|template| key.starts_with(literal_head(template.prefix)))
            .collect()
    }
}

impl Default for CacheKeyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn literal_head(template: &str) -> &str {
    match template.find('{') {
        Some(index) => &template[..index],
        None => template,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fmt::Display;

    use super::*;
    use crate::cache::KEY_NAMESPACE;

    #[test]
    fn names_are_unique() {
        let registry = CacheKeyRegistry::new();
        let names: HashSet<_> = registry.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn every_key_lives_under_the_namespace() {
        let namespace = format!("{KEY_NAMESPACE}.");
        for template in CacheKeyRegistry::new().iter() {
            assert!(template.key.starts_with(&namespace), "{template}");
            assert!(template.prefix.starts_with(&namespace), "{template}");
        }
    }

    #[test]
    fn every_prefix_covers_its_key() {
        let values: Vec<u32> = (10..20).collect();
        let args: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();

        for template in CacheKeyRegistry::new().iter() {
            assert!(template.prefix_arity() <= template.key_arity(), "{template}");
            let key = template.key(&args[..template.key_arity()]);
            let prefix = template.prefix(&args[..template.prefix_arity()]);
            assert!(key.starts_with(&prefix), "{template}: {key} / {prefix}");
            assert!(!key.contains('{'), "{template}: unfilled placeholder in {key}");
        }
    }

    #[test]
    fn lookup_by_name() {
        let registry = CacheKeyRegistry::new();
        let template = registry.get("ConsentsAll").expect("consents template");
        assert_eq!(template.key(&[]), "storefront.consents.all");
        assert!(registry.get("Missing").is_none());
    }

    #[test]
    fn families_of_concrete_key() {
        let registry = CacheKeyRegistry::new();
        let key = catalog::product_tag_all_by_product(4);
        let names: Vec<_> = registry.families_of(&key).iter().map(|t| t.name).collect();

        assert!(names.contains(&"ProductTagAllByProductId"));
        assert!(names.contains(&"ProductTagAll"));
        assert!(!names.contains(&"ConsentsAll"));
    }
}
