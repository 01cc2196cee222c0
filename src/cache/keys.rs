//! Cache key templates.
//!
//! A template pairs a concrete key format with the prefix used to drop a
//! whole family of entries from the external cache store. Both use
//! positional `{N}` placeholders.

use std::fmt::{self, Display, Write};

use sha2::{Digest, Sha256};

/// Root segment shared by every key this crate produces.
pub const KEY_NAMESPACE: &str = "storefront";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKeyTemplate {
    pub name: &'static str,
    pub key: &'static str,
    pub prefix: &'static str,
}

impl CacheKeyTemplate {
    pub const fn new(name: &'static str, key: &'static str, prefix: &'static str) -> Self {
        Self { name, key, prefix }
    }

    /// Number of distinct placeholders in the key format.
    pub fn key_arity(&self) -> usize {
        arity(self.key)
    }

    /// Number of distinct placeholders in the prefix format.
    pub fn prefix_arity(&self) -> usize {
        arity(self.prefix)
    }

    pub fn key(&self, args: &[&dyn Display]) -> String {
        interpolate(self.key, args)
    }

    pub fn prefix(&self, args: &[&dyn Display]) -> String {
        interpolate(self.prefix, args)
    }
}

impl Display for CacheKeyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Replace `{N}` with the `N`th argument.
///
/// Placeholders without a matching argument are left untouched so a
/// partially applied key can still serve as a pattern.
pub fn interpolate(template: &str, args: &[&dyn Display]) -> String {
    let mut output = String::with_capacity(template.len() + args.len() * 4);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let index = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|i| (i, close)));

        match index {
            Some((i, close)) if i < args.len() => {
                let _ = write!(output, "{}", args[i]);
                rest = &after[close + 1..];
            }
            _ => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}

fn arity(template: &str) -> usize {
    let mut highest: Option<usize> = None;
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        if let Some(close) = after.find('}') {
            if let Ok(index) = after[..close].parse::<usize>() {
                highest = Some(highest.map_or(index, |h| h.max(index)));
            }
            rest = &after[close + 1..];
        } else {
            break;
        }
    }
    highest.map_or(0, |h| h + 1)
}

/// Comma separated identifiers, in the order given.
pub fn id_list(ids: &[u32]) -> String {
    let mut output = String::new();
    for (position, id) in ids.iter().enumerate() {
        if position > 0 {
            output.push(',');
        }
        let _ = write!(output, "{id}");
    }
    output
}

/// Stable digest of an identifier set; order and duplicates do not matter.
///
/// Keys may be shared with other processes through the external store, so
/// this avoids `DefaultHasher`, whose output is not stable across builds.
pub fn ids_hash(ids: &[u32]) -> String {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let digest = Sha256::digest(id_list(&sorted).as_bytes());
    hex::encode(&digest[..16])
}
