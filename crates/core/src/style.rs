//! Style attribute handling for slide elements.
//!
//! Element styles are stored as an open map, but the mutation layer only
//! lets through the keys that make sense for the element's type. Keys may
//! arrive in CSS kebab-case (`font-size`) and are stored in camelCase
//! (`fontSize`).

use crate::types::{ElementKind, StyleMap};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex matching a dash followed by a lowercase letter.
static KEBAB_SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z])").unwrap());

/// Keys every element type accepts.
const COMMON_KEYS: &[&str] = &[
    "border",
    "borderRadius",
    "boxShadow",
    "opacity",
    "transform",
];

const TEXT_KEYS: &[&str] = &[
    "color",
    "backgroundColor",
    "fontFamily",
    "fontSize",
    "fontWeight",
    "fontStyle",
    "textAlign",
    "textDecoration",
    "lineHeight",
    "letterSpacing",
];

const IMAGE_KEYS: &[&str] = &["filter", "objectFit"];

const SHAPE_KEYS: &[&str] = &["color", "backgroundColor"];

/// Convert a CSS property name to its camelCase form.
pub fn canonical_key(key: &str) -> String {
    let trimmed = key.trim();
    KEBAB_SEGMENT_REGEX
        .replace_all(trimmed, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Whether `key` (camelCase) is a recognized style attribute for `kind`.
pub fn is_recognized(kind: ElementKind, key: &str) -> bool {
    let specific = match kind {
        ElementKind::Text => TEXT_KEYS,
        ElementKind::Image => IMAGE_KEYS,
        ElementKind::Shape => SHAPE_KEYS,
    };
    COMMON_KEYS.contains(&key) || specific.contains(&key)
}

/// Canonicalize the keys of `patch` and drop the ones `kind` does not
/// recognize.
pub fn normalize_patch(kind: ElementKind, patch: &StyleMap) -> StyleMap {
    let mut normalized = StyleMap::new();

    for (key, value) in patch {
        let key = canonical_key(key);
        if is_recognized(kind, &key) {
            normalized.insert(key, value.clone());
        } else {
            log::warn!(
                "Ignoring style key {:?} not recognized for {} elements",
                key,
                kind.as_str()
            );
        }
    }

    normalized
}

/// Shallow-merge `patch` over `base`.
///
/// Keys in `patch` overwrite keys in `base`; keys only in `base` persist.
/// A JSON `null` in the patch removes the key.
pub fn merge_style(base: &StyleMap, patch: &StyleMap) -> StyleMap {
    let mut merged = base.clone();

    for (key, value) in patch {
        if value.is_null() {
            merged.remove(key);
        } else {
            merged.insert(key.clone(), value.clone());
        }
    }

    merged
}
