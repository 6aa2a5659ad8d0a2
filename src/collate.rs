//! Locale-aware ordering for dropdown options.
//!
//! Approximates the root-locale collation browsers use by default: strings are
//! compared first on their base letters (accents and case folded away), and
//! only strings that tie there are ordered by their raw code points. So
//! `"émile"` sorts between `"Dana"` and `"Felix"`, not after `"Zoe"`.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary collation key: decomposed, combining marks dropped, lowercased.
pub fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort values in place with [`compare`].
pub fn sort(values: &mut [&str]) {
    values.sort_by(|a, b| compare(a, b));
}
