//! GDPR cache keys.

use super::keys::CacheKeyTemplate;

pub const CONSENTS_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ConsentsAll",
    "storefront.consents.all",
    "storefront.consents.",
);

pub fn consents_all() -> String {
    CONSENTS_ALL.key(&[])
}

pub const ALL: &[CacheKeyTemplate] = &[CONSENTS_ALL];
