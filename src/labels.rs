//! Localized UI strings.
//!
//! A [`LabelDictionary`] maps a label key to a per-language string. The same
//! namespace is used for UI strings (`"authors"`, `"closed"`) and for the
//! display names of filter values (a category tagged `"stat"` is shown as the
//! `"stat"` label when one exists). Label strings are trusted configuration
//! and may contain HTML entities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelDictionary(BTreeMap<String, BTreeMap<String, String>>);

impl LabelDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a single translation.
    pub fn insert(&mut self, key: &str, lang: &str, text: &str) {
        self.0
            .entry(key.to_string())
            .or_default()
            .insert(lang.to_string(), text.to_string());
    }

    /// Look up `key` in `lang`. `None` when either is missing.
    pub fn resolve(&self, key: &str, lang: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|translations| translations.get(lang))
            .map(String::as_str)
    }

    /// Look up `key` in `lang`, falling back to the raw key.
    pub fn label_or_key<'a>(&'a self, key: &'a str, lang: &str) -> &'a str {
        match self.resolve(key, lang) {
            Some(text) => text,
            None => {
                tracing::debug!(key, lang, "label missing, using raw key");
                key
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Built-in English and French UI strings.
    pub fn stock() -> Self {
        let mut labels = Self::new();
        for (key, en, fr) in STOCK_LABELS {
            labels.insert(key, "en", en);
            labels.insert(key, "fr", fr);
        }
        labels
    }
}

const STOCK_LABELS: &[(&str, &str, &str)] = &[
    (
        "closed",
        "The virtual poster room is currently closed. Please come back later, thanks for your visit.",
        "La salle virtuelle des posters est actuellement fermée. Veuillez repasser plus tard, merci pour votre visite.",
    ),
    ("authors", "Authors", "Auteurs"),
    ("keywords", "Keywords", "Mots clés"),
    ("categories", "Categories", "Catégories"),
    ("room", "Room", "Salle"),
    ("pdf", "Download PDF", "Télécharger le PDF"),
    ("no_thumbnail", "No poster preview available", "Aperçu du poster indisponible"),
    ("title_filter", "Title contains", "Le titre contient"),
    ("keywords_filter", "Containing keywords", "Contenant les mots clés"),
    ("number_filter", "Poster number", "Numéro du poster"),
    ("posters_count", "Displaying", "Sélection de"),
    ("posters", "posters", "posters"),
];
