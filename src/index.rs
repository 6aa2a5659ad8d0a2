//! Filter index: the distinct values of every filterable dimension.
//!
//! Built once when the room is mounted. The value sets are not recomputed
//! afterwards, so a value only carried by hidden posters still gets its own
//! checkbox or dropdown option.

use crate::types::{PosterRecord, SetDimension, TextDimension};
use std::collections::BTreeMap;

/// Distinct non-empty values per dimension, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterIndex {
    values: BTreeMap<SetDimension, Vec<String>>,
}

impl FilterIndex {
    pub fn build(posters: &[PosterRecord], dimensions: &[SetDimension]) -> Self {
        let mut values: BTreeMap<SetDimension, Vec<String>> = BTreeMap::new();
        for &dimension in dimensions {
            let seen = values.entry(dimension).or_default();
            for poster in posters {
                for value in poster.set_field(dimension).non_empty() {
                    if !seen.iter().any(|v| v == value) {
                        seen.push(value.to_string());
                    }
                }
            }
        }
        Self { values }
    }

    /// Values of `dimension`, or `None` if it was not indexed.
    pub fn values(&self, dimension: SetDimension) -> Option<&[String]> {
        self.values.get(&dimension).map(Vec::as_slice)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = SetDimension> + '_ {
        self.values.keys().copied()
    }
}

/// A poster together with the flags the engine derives for it.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub record: PosterRecord,
    /// `display` as it was at mount; caps visibility forever.
    pub initially_visible: bool,
    /// Result of the last visibility pass.
    pub visible: bool,
    matches: BTreeMap<TextDimension, bool>,
}

impl GalleryEntry {
    pub fn new(record: PosterRecord, text_dimensions: &[TextDimension]) -> Self {
        let initially_visible = record.display;
        Self {
            record,
            initially_visible,
            visible: false,
            matches: text_dimensions.iter().map(|&d| (d, true)).collect(),
        }
    }

    /// Match flag for a text dimension. Unconfigured dimensions always match.
    pub fn matches(&self, dimension: TextDimension) -> bool {
        self.matches.get(&dimension).copied().unwrap_or(true)
    }

    pub fn set_match(&mut self, dimension: TextDimension, matched: bool) {
        self.matches.insert(dimension, matched);
    }

    /// Whether every text filter currently lets this poster through.
    pub fn matches_all_text(&self) -> bool {
        self.matches.values().all(|&m| m)
    }
}

/// Wrap records into entries with fresh derived flags.
pub fn prepare_entries(
    posters: Vec<PosterRecord>,
    text_dimensions: &[TextDimension],
) -> Vec<GalleryEntry> {
    posters
        .into_iter()
        .map(|record| GalleryEntry::new(record, text_dimensions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::poster;

    #[test]
    fn build_collects_distinct_values_in_first_seen_order() {
        let posters = vec![
            poster("1").categories(&["stat", "NGS"]).authors(&["Ada"]).build(),
            poster("2").categories(&["NGS", "FAIR"]).authors(&["Bob", "Ada"]).build(),
        ];
        let index = FilterIndex::build(&posters, &[SetDimension::Categories, SetDimension::Authors]);
        assert_eq!(
            index.values(SetDimension::Categories).unwrap(),
            &["stat", "NGS", "FAIR"]
        );
        assert_eq!(index.values(SetDimension::Authors).unwrap(), &["Ada", "Bob"]);
    }

    #[test]
    fn build_skips_empty_values() {
        let posters = vec![poster("1").categories(&["", "stat"]).build()];
        let index = FilterIndex::build(&posters, &[SetDimension::Categories]);
        assert_eq!(index.values(SetDimension::Categories).unwrap(), &["stat"]);
    }

    #[test]
    fn build_includes_values_of_hidden_posters() {
        let posters = vec![poster("1").categories(&["stat"]).hidden().build()];
        let index = FilterIndex::build(&posters, &[SetDimension::Categories]);
        assert_eq!(index.values(SetDimension::Categories).unwrap(), &["stat"]);
    }

    #[test]
    fn unindexed_dimension_is_none() {
        let posters = vec![poster("1").authors(&["Ada"]).build()];
        let index = FilterIndex::build(&posters, &[SetDimension::Categories]);
        assert!(index.values(SetDimension::Authors).is_none());
        assert_eq!(index.dimensions().collect::<Vec<_>>(), vec![SetDimension::Categories]);
    }

    #[test]
    fn build_is_deterministic() {
        let posters = vec![
            poster("1").categories(&["b", "a"]).authors(&["Zed"]).build(),
            poster("2").categories(&["c"]).authors(&["Amy", "Zed"]).build(),
        ];
        let dims = [SetDimension::Categories, SetDimension::Authors];
        assert_eq!(FilterIndex::build(&posters, &dims), FilterIndex::build(&posters, &dims));
    }

    #[test]
    fn entries_snapshot_display_and_start_matching() {
        let entries = prepare_entries(
            vec![poster("1").build(), poster("2").hidden().build()],
            &[TextDimension::Title, TextDimension::Number],
        );
        assert!(entries[0].initially_visible);
        assert!(!entries[1].initially_visible);
        assert!(entries.iter().all(GalleryEntry::matches_all_text));
        assert!(entries[0].matches(TextDimension::Keywords));
    }
}
