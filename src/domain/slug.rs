//! Search-engine friendly names for catalog entities.
//!
//! Entities carry an explicit SE name and optional per-language overrides.
//! When neither is present the name is derived from the display name with
//! the `slug` crate, transliterating Chinese through `pinyin` first so
//! “运动鞋” becomes `yun-dong-xie`.

use pinyin::{Pinyin, ToPinyin};
use slug::slugify;
use thiserror::Error;

use crate::domain::entities::SlugSupported;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive a URL-safe slug from human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(transliterate_to_ascii(input));
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Resolve the SE name of `entity` for the language with `seo_code`.
///
/// Falls back from the localized value to the default SE name, then to a
/// slug derived from the display name.
pub fn resolve_se_name<E>(entity: &E, seo_code: Option<&str>) -> Result<String, SlugError>
where
    E: SlugSupported + ?Sized,
{
    let localized = seo_code
        .and_then(|code| entity.localized_se_names().get(code))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty());
    if let Some(value) = localized {
        return Ok(value.to_string());
    }

    match entity.se_name().map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(value.to_string()),
        None => derive_slug(entity.display_name()),
    }
}

fn transliterate_to_ascii(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for ch in input.chars() {
        if ch.is_ascii() {
            output.push(ch);
            continue;
        }

        match ch.to_pinyin() {
            Some(py) => push_syllable(&mut output, py),
            None if ch.is_whitespace() => output.push(' '),
            // slugify decides how to fold or drop the rest
            None => output.push(ch),
        }
    }

    output
}

fn push_syllable(buffer: &mut String, pinyin: Pinyin) {
    if !buffer.is_empty() && !buffer.ends_with(' ') {
        buffer.push(' ');
    }
    buffer.push_str(pinyin.plain());
}
