//! Poster room configuration.
//!
//! The configuration document is usually the JSON file the conference site
//! already publishes next to the page, but TOML is accepted too (picked by
//! file extension). Several documents can be layered: stock defaults are
//! overridden by each document in turn.
//!
//! ## Layering
//!
//! ```text
//! stock defaults
//!   └─ posters.json        ← poster list exported from the submission system
//!        └─ room.toml      ← site settings: base URLs, language, labels
//! ```
//!
//! Objects are merged key by key, so a document can override one translation
//! of one label without repeating the whole dictionary. Arrays and scalars
//! replace what was there.
//!
//! ## Options
//!
//! ```toml
//! poster_show = false            # Open the room (the poster_bypass query flag also opens it)
//! lang = "fr"                    # Language code used for every label lookup
//! meeting_room_base_url = ""     # Prefix for room links; empty hides rooms
//! poster_base_url = ""           # Prefix for PDF links; empty hides downloads
//! thumbnail_base_url = ""        # Prefix for thumbnails; empty hides previews
//! filter_dimensions = ["categories", "authors"]
//! text_filter_dimensions = ["title", "keywords", "number"]
//!
//! [[controls]]
//! kind = "checkboxes"            # checkboxes | dropdown | text
//! dimension = "categories"
//! label = "categories"           # Label key of the control caption
//! ```
//!
//! Unknown top-level keys are rejected to catch typos early. Unknown keys
//! inside poster records are ignored.

use crate::labels::LabelDictionary;
use crate::types::{PosterRecord, SetDimension, TextDimension};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Root configuration object.
///
/// Every field has a default, so an empty document is a valid (closed,
/// empty) poster room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Whether the room is open to visitors.
    #[serde(deserialize_with = "truthy")]
    pub poster_show: bool,
    pub posters: Vec<PosterRecord>,
    /// Language code for label lookups.
    #[serde(alias = "language")]
    pub lang: String,
    pub labels: LabelDictionary,
    pub meeting_room_base_url: String,
    pub poster_base_url: String,
    pub thumbnail_base_url: String,
    /// Set-valued dimensions indexed for filtering.
    #[serde(alias = "filter_list")]
    pub filter_dimensions: Vec<SetDimension>,
    /// String fields that can be searched by a text box.
    #[serde(alias = "match_list")]
    pub text_filter_dimensions: Vec<TextDimension>,
    /// Filter bar layout, in display order.
    pub controls: Vec<ControlSpec>,
    /// Accepted so exported documents still load; filter state is always
    /// rebuilt from the posters at mount.
    #[serde(skip_serializing)]
    pub filters: Option<serde_json::Value>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            poster_show: false,
            posters: Vec::new(),
            lang: "fr".to_string(),
            labels: LabelDictionary::stock(),
            meeting_room_base_url: String::new(),
            poster_base_url: String::new(),
            thumbnail_base_url: String::new(),
            filter_dimensions: vec![SetDimension::Categories, SetDimension::Authors],
            text_filter_dimensions: vec![
                TextDimension::Title,
                TextDimension::Keywords,
                TextDimension::Number,
            ],
            controls: default_controls(),
            filters: None,
        }
    }
}

/// One control of the filter bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlSpec {
    /// Checkbox per value plus a master checkbox.
    Checkboxes { dimension: SetDimension, label: String },
    /// Single choice among the values, or no selection.
    Dropdown { dimension: SetDimension, label: String },
    /// Case-insensitive substring search.
    Text { dimension: TextDimension, label: String },
}

impl ControlSpec {
    pub fn label(&self) -> &str {
        match self {
            ControlSpec::Checkboxes { label, .. }
            | ControlSpec::Dropdown { label, .. }
            | ControlSpec::Text { label, .. } => label,
        }
    }

    pub fn set_dimension(&self) -> Option<SetDimension> {
        match self {
            ControlSpec::Checkboxes { dimension, .. } | ControlSpec::Dropdown { dimension, .. } => {
                Some(*dimension)
            }
            ControlSpec::Text { .. } => None,
        }
    }
}

fn default_controls() -> Vec<ControlSpec> {
    vec![
        ControlSpec::Checkboxes {
            dimension: SetDimension::Categories,
            label: "categories".into(),
        },
        ControlSpec::Text {
            dimension: TextDimension::Title,
            label: "title_filter".into(),
        },
        ControlSpec::Text {
            dimension: TextDimension::Keywords,
            label: "keywords_filter".into(),
        },
        ControlSpec::Dropdown {
            dimension: SetDimension::Authors,
            label: "authors".into(),
        },
        ControlSpec::Text {
            dimension: TextDimension::Number,
            label: "number_filter".into(),
        },
    ]
}

impl Configuration {
    /// Check the language and that no set dimension is driven by two
    /// controls.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        let mut bound: Vec<SetDimension> = Vec::new();
        for dimension in self.controls.iter().filter_map(ControlSpec::set_dimension) {
            if bound.contains(&dimension) {
                return Err(ConfigError::Validation(format!(
                    "'{dimension}' is bound to more than one control"
                )));
            }
            bound.push(dimension);
        }
        Ok(())
    }

    /// Drop controls bound to a dimension that is not configured for
    /// filtering, so a reduced `filter_dimensions` or
    /// `text_filter_dimensions` works with the default filter bar.
    pub fn retain_configured_controls(&mut self) {
        let filter_dimensions = &self.filter_dimensions;
        let text_filter_dimensions = &self.text_filter_dimensions;
        self.controls.retain(|control| {
            let configured = match control {
                ControlSpec::Checkboxes { dimension, .. } | ControlSpec::Dropdown { dimension, .. } => {
                    filter_dimensions.contains(dimension)
                }
                ControlSpec::Text { dimension, .. } => text_filter_dimensions.contains(dimension),
            };
            if !configured {
                tracing::debug!(?control, "skipping control for unconfigured dimension");
            }
            configured
        });
    }

    /// Base URLs, with empty strings meaning "feature disabled".
    pub fn base_urls(&self) -> BaseUrls {
        BaseUrls {
            meeting_room: non_empty(&self.meeting_room_base_url),
            poster: non_empty(&self.poster_base_url),
            thumbnail: non_empty(&self.thumbnail_base_url),
        }
    }
}

/// Link prefixes for optional poster fields. `None` suppresses the field for
/// every poster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseUrls {
    pub meeting_room: Option<String>,
    pub poster: Option<String>,
    pub thumbnail: Option<String>,
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Accepts `true`/`false` as well as the `0`/`1` flags older documents use.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    struct TruthyVisitor;

    impl Visitor<'_> for TruthyVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or an integer flag")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(TruthyVisitor)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Alternative top-level key spellings, normalized before merging.
const KEY_ALIASES: &[(&str, &str)] = &[
    ("language", "lang"),
    ("filter_list", "filter_dimensions"),
    ("match_list", "text_filter_dimensions"),
];

/// Returns the stock default config as a JSON object.
pub fn stock_defaults_value() -> serde_json::Value {
    serde_json::to_value(Configuration::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Objects are merged key-by-key (overlay keys override base keys).
/// - Non-object values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_json(base: serde_json::Value, overlay: serde_json::Value) -> serde_json::Value {
    match (base, overlay) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => merge_json(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

fn normalize_aliases(mut value: serde_json::Value) -> serde_json::Value {
    if let serde_json::Value::Object(map) = &mut value {
        for (alias, canonical) in KEY_ALIASES {
            if let Some(v) = map.remove(*alias) {
                map.insert((*canonical).to_string(), v);
            }
        }
    }
    value
}

/// Read one configuration document as a raw JSON value.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn load_document(path: &Path) -> Result<serde_json::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let value = if is_toml {
        let table: toml::Value = toml::from_str(&content)?;
        serde_json::to_value(table)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(value)
}

/// Merge overlays onto a base value in order, then deserialize and validate.
pub fn resolve_config(
    base: serde_json::Value,
    overlays: impl IntoIterator<Item = serde_json::Value>,
) -> Result<Configuration, ConfigError> {
    let merged = overlays
        .into_iter()
        .map(normalize_aliases)
        .fold(base, merge_json);
    let mut config: Configuration = serde_json::from_value(merged)?;
    config.retain_configured_controls();
    config.validate()?;
    Ok(config)
}

/// Load and layer configuration documents on top of the stock defaults.
pub fn load_config<P: AsRef<Path>>(paths: &[P]) -> Result<Configuration, ConfigError> {
    let overlays = paths
        .iter()
        .map(|p| load_document(p.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    resolve_config(stock_defaults_value(), overlays)
}

/// Returns a fully-commented stock configuration with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Poster Room Configuration
# ========================
# All settings are optional. Values shown below are the defaults.
#
# Several documents can be passed with repeated --config flags; each one
# overrides the previous. A common split is the exported poster list as JSON
# plus this file for the site settings.
#
# Unknown top-level keys will cause an error.

# Open the room. Visitors can still force it open with ?poster_bypass.
poster_show = false

# Language code used for every label lookup.
lang = "fr"

# Link prefixes. Leave empty to hide that field on every poster.
meeting_room_base_url = ""
poster_base_url = ""
thumbnail_base_url = ""

# Set-valued poster fields indexed for filtering.
filter_dimensions = ["categories", "authors"]

# Poster fields searchable from a text box.
text_filter_dimensions = ["title", "keywords", "number"]

# Posters. Authors and categories may be arrays or tables whose keys are the
# values.
posters = []
#
# [[posters]]
# number = "7"
# title = "Graphs"
# authors = ["Ada"]
# categories = ["stat"]
# keywords = "graph theory, networks"
# room = "room-7"
# poster = "poster-7.pdf"
# thumbnail = "poster-7.png"
# display = true

# ---------------------------------------------------------------------------
# Filter bar, in display order. `label` is a key of the label dictionary.
# kind = checkboxes | dropdown | text
# ---------------------------------------------------------------------------
[[controls]]
kind = "checkboxes"
dimension = "categories"
label = "categories"

[[controls]]
kind = "text"
dimension = "title"
label = "title_filter"

[[controls]]
kind = "text"
dimension = "keywords"
label = "keywords_filter"

[[controls]]
kind = "dropdown"
dimension = "authors"
label = "authors"

[[controls]]
kind = "text"
dimension = "number"
label = "number_filter"

# ---------------------------------------------------------------------------
# Labels: key -> language -> text. Merged over the built-in English and
# French strings. Category tags are looked up here too.
# ---------------------------------------------------------------------------
# [labels.stat]
# en = "Statistics, Machine Learning and AI"
# fr = "Statistiques, Machine Learning et I.A."
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_closed_and_french() {
        let config = Configuration::default();
        assert!(!config.poster_show);
        assert_eq!(config.lang, "fr");
        assert!(config.posters.is_empty());
    }

    #[test]
    fn default_dimensions() {
        let config = Configuration::default();
        assert_eq!(
            config.filter_dimensions,
            vec![SetDimension::Categories, SetDimension::Authors]
        );
        assert_eq!(config.text_filter_dimensions.len(), 3);
        assert_eq!(config.controls.len(), 5);
    }

    #[test]
    fn default_base_urls_are_disabled() {
        let urls = Configuration::default().base_urls();
        assert_eq!(urls, BaseUrls::default());
    }

    #[test]
    fn empty_document_is_valid() {
        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn poster_show_accepts_integer_flag() {
        let config: Configuration = serde_json::from_str(r#"{"poster_show": 1}"#).unwrap();
        assert!(config.poster_show);
        let config: Configuration = serde_json::from_str(r#"{"poster_show": 0}"#).unwrap();
        assert!(!config.poster_show);
    }

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "poster_show": true,
            "lang": "en",
            "poster_base_url": "https://example.org/pdf/",
            "posters": [{"number": "7", "title": "Graphs", "display": true}]
        }"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert!(config.poster_show);
        assert_eq!(config.posters.len(), 1);
        assert_eq!(
            config.base_urls().poster.as_deref(),
            Some("https://example.org/pdf/")
        );
        assert_eq!(config.base_urls().thumbnail, None);
        // Defaults preserved
        assert_eq!(config.controls.len(), 5);
    }

    #[test]
    fn aliases_are_accepted() {
        let json = r#"{"language": "en", "filter_list": ["authors"], "match_list": ["number"]}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.lang, "en");
        assert_eq!(config.filter_dimensions, vec![SetDimension::Authors]);
        assert_eq!(config.text_filter_dimensions, vec![TextDimension::Number]);
    }

    #[test]
    fn supplied_filters_are_accepted_and_ignored() {
        let json = r#"{"filters": {"categories": {"stat": false}}}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert!(config.filters.is_some());
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.get("filters").is_none());
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<Configuration, _> = serde_json::from_str(r#"{"poster_shwo": true}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_dimension_rejected() {
        let result: Result<Configuration, _> =
            serde_json::from_str(r#"{"filter_dimensions": ["institutes"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn controls_parse_with_kind_tag() {
        let json = r#"{"controls": [
            {"kind": "dropdown", "dimension": "categories", "label": "categories"},
            {"kind": "text", "dimension": "title", "label": "title_filter"}
        ]}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.controls[0],
            ControlSpec::Dropdown {
                dimension: SetDimension::Categories,
                label: "categories".into()
            }
        );
        assert!(matches!(
            config.controls[1],
            ControlSpec::Text {
                dimension: TextDimension::Title,
                ..
            }
        ));
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(Configuration::default().validate().is_ok());
    }

    #[test]
    fn unconfigured_set_dimension_drops_its_control() {
        let mut config = Configuration {
            filter_dimensions: vec![SetDimension::Categories],
            ..Default::default()
        };
        config.retain_configured_controls();
        assert_eq!(config.controls.len(), 4);
        assert!(
            config
                .controls
                .iter()
                .all(|c| c.set_dimension() != Some(SetDimension::Authors))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unconfigured_text_dimension_drops_its_control() {
        let mut config = Configuration {
            text_filter_dimensions: vec![TextDimension::Title],
            ..Default::default()
        };
        config.retain_configured_controls();
        let texts: Vec<&ControlSpec> = config
            .controls
            .iter()
            .filter(|c| matches!(c, ControlSpec::Text { .. }))
            .collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].label(), "title_filter");
    }

    #[test]
    fn resolve_config_accepts_reduced_filter_list() {
        let overlay = serde_json::json!({"poster_show": true, "filter_list": ["categories"]});
        let config = resolve_config(stock_defaults_value(), [overlay]).unwrap();
        assert_eq!(config.filter_dimensions, vec![SetDimension::Categories]);
        assert_eq!(config.controls.len(), 4);
    }

    #[test]
    fn resolve_config_accepts_reduced_match_list() {
        let overlay = serde_json::json!({"poster_show": true, "match_list": ["title"]});
        let config = resolve_config(stock_defaults_value(), [overlay]).unwrap();
        assert_eq!(config.text_filter_dimensions, vec![TextDimension::Title]);
        assert_eq!(config.controls.len(), 3);
    }

    #[test]
    fn validate_dimension_bound_twice() {
        let mut config = Configuration::default();
        config.controls.push(ControlSpec::Dropdown {
            dimension: SetDimension::Categories,
            label: "categories".into(),
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than one control"));
    }

    #[test]
    fn validate_empty_lang() {
        let config = Configuration {
            lang: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // merge_json tests
    // =========================================================================

    #[test]
    fn merge_json_scalar_override() {
        let base = serde_json::json!({"lang": "fr"});
        let overlay = serde_json::json!({"lang": "en"});
        let merged = merge_json(base, overlay);
        assert_eq!(merged["lang"], "en");
    }

    #[test]
    fn merge_json_deep_nested_labels() {
        let base = serde_json::json!({"labels": {"room": {"en": "Room", "fr": "Salle"}}});
        let overlay = serde_json::json!({"labels": {"room": {"en": "Booth"}}});
        let merged = merge_json(base, overlay);
        assert_eq!(merged["labels"]["room"]["en"], "Booth");
        assert_eq!(merged["labels"]["room"]["fr"], "Salle");
    }

    #[test]
    fn merge_json_arrays_replace() {
        let base = serde_json::json!({"filter_dimensions": ["categories", "authors"]});
        let overlay = serde_json::json!({"filter_dimensions": ["authors"]});
        let merged = merge_json(base, overlay);
        assert_eq!(merged["filter_dimensions"], serde_json::json!(["authors"]));
    }

    #[test]
    fn resolve_config_merges_labels_over_stock() {
        let overlay = serde_json::json!({
            "labels": {"stat": {"en": "Statistics"}}
        });
        let config = resolve_config(stock_defaults_value(), [overlay]).unwrap();
        assert_eq!(config.labels.resolve("stat", "en"), Some("Statistics"));
        assert_eq!(config.labels.resolve("authors", "fr"), Some("Auteurs"));
    }

    #[test]
    fn resolve_config_with_no_filter_dimensions_keeps_text_controls() {
        let overlay = serde_json::json!({"filter_dimensions": []});
        let config = resolve_config(stock_defaults_value(), [overlay]).unwrap();
        assert!(config.controls.iter().all(|c| c.set_dimension().is_none()));
        assert_eq!(config.controls.len(), 3);
    }

    #[test]
    fn resolve_config_normalizes_aliases() {
        let overlay = serde_json::json!({"filter_list": ["categories"], "controls": []});
        let config = resolve_config(stock_defaults_value(), [overlay]).unwrap();
        assert_eq!(config.filter_dimensions, vec![SetDimension::Categories]);
    }

    #[test]
    fn resolve_config_rejects_invalid_layout() {
        let overlay = serde_json::json!({"controls": [
            {"kind": "checkboxes", "dimension": "authors", "label": "authors"},
            {"kind": "dropdown", "dimension": "authors", "label": "authors"}
        ]});
        let result = resolve_config(stock_defaults_value(), [overlay]);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_with_no_documents_is_default() {
        let config = load_config::<&Path>(&[]).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn load_config_layers_json_and_toml() {
        let tmp = TempDir::new().unwrap();
        let posters = tmp.path().join("posters.json");
        fs::write(
            &posters,
            r#"{"posters": [{"number": 1, "authors": {"Ada": 1}, "display": true}], "lang": "fr"}"#,
        )
        .unwrap();
        let site = tmp.path().join("room.toml");
        fs::write(
            &site,
            r#"
poster_show = true
lang = "en"
meeting_room_base_url = "https://meet.example.org/"
"#,
        )
        .unwrap();

        let config = load_config(&[posters, site]).unwrap();
        assert!(config.poster_show);
        assert_eq!(config.lang, "en");
        assert_eq!(config.posters.len(), 1);
        assert_eq!(config.posters[0].number, "1");
        assert_eq!(
            config.base_urls().meeting_room.as_deref(),
            Some("https://meet.example.org/")
        );
    }

    #[test]
    fn load_config_invalid_json_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posters.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(&[path]), Err(ConfigError::Json(_))));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("room.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(&[path]), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.json");
        assert!(matches!(load_config(&[path]), Err(ConfigError::Io(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value = toml::from_str(stock_config_toml()).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: Configuration = toml::from_str(stock_config_toml()).unwrap();
        let defaults = Configuration::default();
        assert_eq!(config.poster_show, defaults.poster_show);
        assert_eq!(config.lang, defaults.lang);
        assert_eq!(config.filter_dimensions, defaults.filter_dimensions);
        assert_eq!(config.text_filter_dimensions, defaults.text_filter_dimensions);
        assert_eq!(config.controls, defaults.controls);
        assert_eq!(config.labels, defaults.labels);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for key in [
            "poster_show",
            "posters",
            "lang",
            "labels",
            "filter_dimensions",
            "text_filter_dimensions",
            "controls",
        ] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
